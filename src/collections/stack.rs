//! LIFO-стек двух режимов.
//!
//! - `Fixed { capacity }` — слоты выделяются один раз при создании, push в
//!   заполненный стек возвращает `Overflow`.
//! - `Dynamic` — растёт амортизированно и отдаёт память, когда заполнение
//!   падает до четверти выделенного.
//!
//! Вершина стека — логическая длина вектора; при pop ничего не
//! перераспределяется, кроме редкого сжатия в динамическом режиме.

use std::fmt;

use lineal_error::CollectionError;
use tracing::debug;

use crate::config::StackSettings;

/// Ниже этой ёмкости динамический стек не сжимается.
const MIN_SHRINK_CAPACITY: usize = 16;

/// Режим работы стека.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMode {
    Fixed { capacity: usize },
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    mode: StackMode,
    items: Vec<T>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<T> Stack<T> {
    /// Стек фиксированной ёмкости.
    ///
    /// # Panics
    ///
    /// Как и `Vec::with_capacity`, паникует, если `capacity` слотов не
    /// помещается в адресное пространство. Для ёмкости из внешних данных
    /// есть [`Stack::try_fixed`].
    pub fn fixed(capacity: usize) -> Self {
        Self::with_mode(StackMode::Fixed { capacity })
    }

    /// Фиксированный стек с fallible-выделением: при нехватке памяти или
    /// переполнении размера возвращает `AllocationFailed`.
    pub fn try_fixed(capacity: usize) -> Result<Self, CollectionError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity).map_err(|e| {
            debug!(capacity, error = %e, "stack preallocation failed");
            CollectionError::AllocationFailed { capacity }
        })?;

        Ok(Self {
            mode: StackMode::Fixed { capacity },
            items,
        })
    }

    /// Динамически растущий стек.
    pub fn dynamic() -> Self {
        Self::with_mode(StackMode::Dynamic)
    }

    /// Паникует в тех же случаях, что и [`Stack::fixed`].
    pub fn with_mode(mode: StackMode) -> Self {
        let items = match mode {
            StackMode::Fixed { capacity } => Vec::with_capacity(capacity),
            StackMode::Dynamic => Vec::new(),
        };

        Self { mode, items }
    }

    pub fn try_with_mode(mode: StackMode) -> Result<Self, CollectionError> {
        match mode {
            StackMode::Fixed { capacity } => Self::try_fixed(capacity),
            StackMode::Dynamic => Ok(Self::dynamic()),
        }
    }

    /// Стек в режиме, заданном конфигурацией. Выделение fallible: ёмкость
    /// приходит из файла или окружения.
    pub fn from_settings(settings: &StackSettings) -> Result<Self, CollectionError> {
        Self::try_with_mode(settings.mode())
    }

    /// Кладёт значение на вершину.
    ///
    /// В фиксированном режиме при заполненном стеке возвращает `Overflow`,
    /// не изменяя содержимого.
    pub fn push(
        &mut self,
        value: T,
    ) -> Result<(), CollectionError> {
        if let StackMode::Fixed { capacity } = self.mode {
            if self.items.len() >= capacity {
                debug!(capacity, "stack overflow");
                return Err(CollectionError::Overflow { capacity });
            }
        }

        self.items.push(value);
        Ok(())
    }

    /// Снимает значение с вершины; на пустом стеке — `Underflow`.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        let Some(value) = self.items.pop() else {
            debug!("stack underflow");
            return Err(CollectionError::Underflow);
        };

        if self.mode == StackMode::Dynamic {
            self.shrink_if_sparse();
        }

        Ok(value)
    }

    /// Значение на вершине без снятия.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Заполнен ли стек. Динамический стек заполненным не бывает.
    pub fn is_full(&self) -> bool {
        match self.mode {
            StackMode::Fixed { capacity } => self.items.len() >= capacity,
            StackMode::Dynamic => false,
        }
    }

    /// Ёмкость фиксированного стека; `None` для динамического.
    pub fn capacity(&self) -> Option<usize> {
        match self.mode {
            StackMode::Fixed { capacity } => Some(capacity),
            StackMode::Dynamic => None,
        }
    }

    pub fn mode(&self) -> StackMode {
        self.mode
    }

    /// Удаляет все элементы. Фиксированный стек сохраняет выделенные слоты.
    pub fn clear(&mut self) {
        self.items.clear();

        if self.mode == StackMode::Dynamic {
            self.items.shrink_to(MIN_SHRINK_CAPACITY);
        }
    }

    pub fn print(&self)
    where
        T: fmt::Display,
    {
        println!("{self}");
    }

    fn shrink_if_sparse(&mut self) {
        let allocated = self.items.capacity();

        if allocated > MIN_SHRINK_CAPACITY && self.items.len() <= allocated / 4 {
            self.items
                .shrink_to((allocated / 2).max(MIN_SHRINK_CAPACITY));
            debug!(
                from = allocated,
                to = self.items.capacity(),
                len = self.items.len(),
                "dynamic stack shrunk"
            );
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для Stack
////////////////////////////////////////////////////////////////////////////////

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::dynamic()
    }
}

/// Снизу вверх: `{ 1 2 3 }`, пустой стек — `{ }`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in &self.items {
            write!(f, "{value} ")?;
        }
        write!(f, "}}")
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
