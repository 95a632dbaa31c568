//! Нормализация индексов в стиле Python.
//!
//! Отрицательный индекс отсчитывается от конца: `-1` — последний элемент,
//! `-len` — первый. Нормализация — чистая функция, проверка границ —
//! отдельный шаг, через который проходят все индексные операции списков.

use lineal_error::CollectionError;

/// Направление и длина обхода до узла.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Первый элемент: берётся из ссылки на голову.
    Head,
    /// Последний элемент: берётся из ссылки на хвост.
    Tail,
    /// Шагов вперёд от головы.
    Forward(usize),
    /// Шагов назад от хвоста.
    Backward(usize),
}

/// Переводит индекс в неотрицательную форму: `index` для `index >= 0`,
/// иначе `len + index`. Результат может остаться отрицательным или выйти за
/// `len` — это решает [`check_bounds`].
#[inline]
pub fn normalize_index(
    index: isize,
    len: usize,
) -> isize {
    if index >= 0 {
        index
    } else {
        isize::try_from(len).unwrap_or(isize::MAX) + index
    }
}

/// Единая проверка границ: возвращает позицию в `[0, len)` или
/// `IndexOutOfBounds`, если коллекция пуста либо индекс вне
/// `[-len, len - 1]`.
pub fn check_bounds(
    index: isize,
    len: usize,
) -> Result<usize, CollectionError> {
    match usize::try_from(normalize_index(index, len)) {
        Ok(position) if position < len => Ok(position),
        _ => Err(CollectionError::IndexOutOfBounds { index, len }),
    }
}

/// Выбирает кратчайший обход до позиции `position` (должна быть `< len`).
///
/// Граничные позиции берутся напрямую; для внутренних идём от головы, если
/// `position <= len - position`, иначе от хвоста.
pub fn traversal_plan(
    position: usize,
    len: usize,
) -> Traversal {
    if position == 0 {
        Traversal::Head
    } else if position + 1 == len {
        Traversal::Tail
    } else if position <= len - position {
        Traversal::Forward(position)
    } else {
        Traversal::Backward(len - 1 - position)
    }
}
