//! Двусвязный список с отрицательными индексами.
//!
//! Узлы живут в арене и ссылаются друг на друга индексами слотов. Доступ по
//! индексу идёт с ближайшего конца: от головы, если позиция в первой
//! половине, иначе от хвоста, поэтому худший случай — `len / 2` шагов.

use std::fmt;

use lineal_error::CollectionError;
use tracing::{debug, trace};

use super::{
    arena::Arena,
    index::{check_bounds, traversal_plan, Traversal},
    ValidationError,
};
use crate::{debug_assert_invariant, validate};

type Link = Option<usize>;

/// Узел двусвязного списка.
///
/// Поля:
/// - value: значение, которым владеет узел.
/// - next: индекс следующего узла (None у хвоста).
/// - prev: индекс предыдущего узла (None у головы).
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Link,
    prev: Link,
}

/// Двусвязный список с доступом по индексу за O(min(i, n - i)).
///
/// Все индексные операции принимают `isize`: `-1` — последний элемент,
/// `-len` — первый.
#[derive(Clone)]
pub struct IndexedList<T> {
    nodes: Arena<Node<T>>,
    head: Link,
    tail: Link,
    length: usize,
}

/// Обход значений слева направо (для Display/Debug/сравнения).
struct Values<'a, T> {
    list: &'a IndexedList<T>,
    current: Link,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<T> IndexedList<T> {
    /// Создаёт пустой список.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Возвращает текущее число элементов в списке.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Проверяет на пустоту.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Добавляет значение в конец списка. O(1).
    pub fn append(
        &mut self,
        value: T,
    ) {
        let handle = self.nodes.insert(Node {
            value,
            next: None,
            prev: self.tail,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(handle),
            None => self.head = Some(handle),
        }

        self.tail = Some(handle);
        self.length += 1;
    }

    /// Вставляет значение перед элементом, который сейчас стоит на позиции
    /// `index`.
    ///
    /// В пустой список допускается только `index == 0` (сводится к
    /// `append`). Индекс `0` или `-len` делает значение новой головой.
    pub fn insert(
        &mut self,
        value: T,
        index: isize,
    ) -> Result<(), CollectionError> {
        if self.length == 0 && index == 0 {
            self.append(value);
            return Ok(());
        }

        let (position, target) = self.locate(index)?;

        if position == 0 {
            self.link_front(value);
        } else {
            let prev = self.nodes[target].prev;
            let handle = self.nodes.insert(Node {
                value,
                next: Some(target),
                prev,
            });

            self.nodes[target].prev = Some(handle);
            if let Some(prev) = prev {
                self.nodes[prev].next = Some(handle);
            }

            self.length += 1;
        }

        debug_assert_invariant!(
            self.nodes.len() == self.length,
            "insert: {} nodes for length {}",
            self.nodes.len(),
            self.length
        );

        Ok(())
    }

    /// Удаляет и возвращает значение на позиции `index`.
    pub fn pop(
        &mut self,
        index: isize,
    ) -> Result<T, CollectionError> {
        let (_, target) = self.locate(index)?;
        let node = self.nodes.remove(target);

        match (node.prev, node.next) {
            // единственный элемент
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
            // голова
            (None, Some(next)) => {
                self.nodes[next].prev = None;
                self.head = Some(next);
            }
            // хвост
            (Some(prev), None) => {
                self.nodes[prev].next = None;
                self.tail = Some(prev);
            }
            (Some(prev), Some(next)) => {
                self.nodes[prev].next = Some(next);
                self.nodes[next].prev = Some(prev);
            }
        }

        self.length -= 1;

        debug_assert_invariant!(
            self.nodes.len() == self.length,
            "pop: {} nodes for length {}",
            self.nodes.len(),
            self.length
        );

        Ok(node.value)
    }

    /// Возвращает ссылку на значение на позиции `index`.
    pub fn value_at(
        &self,
        index: isize,
    ) -> Result<&T, CollectionError> {
        let (_, handle) = self.locate(index)?;
        Ok(&self.nodes[handle].value)
    }

    /// Возвращает изменяемую ссылку на значение на позиции `index`.
    pub fn value_at_mut(
        &mut self,
        index: isize,
    ) -> Result<&mut T, CollectionError> {
        let (_, handle) = self.locate(index)?;
        Ok(&mut self.nodes[handle].value)
    }

    /// Первый элемент, если список не пуст.
    pub fn first(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].value)
    }

    /// Последний элемент, если список не пуст.
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|t| &self.nodes[t].value)
    }

    /// Удаляет все элементы из списка и сбрасывает длину.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Снимок значений слева направо.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    /// Печатает список целиком в stdout.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        println!("{self}");
    }

    /// Печатает значение на позиции `index` в stdout.
    pub fn print_at(
        &self,
        index: isize,
    ) -> Result<(), CollectionError>
    where
        T: fmt::Display,
    {
        let value = self.value_at(index)?;
        println!("{value}");
        Ok(())
    }

    /// Проверяет структурные инварианты: согласованность головы/хвоста с
    /// длиной, обход в обе стороны ровно за `len` шагов и симметрию
    /// `next`/`prev` у соседних узлов.
    pub fn validate_invariants(&self) -> Result<(), ValidationError> {
        validate!(
            (self.length == 0) == (self.head.is_none() && self.tail.is_none()),
            ValidationError::BoundaryMismatch {
                message: format!(
                    "length {} with head {:?} and tail {:?}",
                    self.length, self.head, self.tail
                )
            }
        );

        validate!(
            self.nodes.len() == self.length,
            ValidationError::LengthMismatch {
                expected: self.length,
                actual: self.nodes.len()
            }
        );

        // Прямой обход: каждый next.prev указывает назад на текущий узел.
        let mut count = 0;
        let mut prev: Link = None;
        let mut current = self.head;

        while let Some(handle) = current {
            validate!(
                count < self.length,
                ValidationError::CyclicReference {
                    message: format!("forward walk passed length {}", self.length)
                }
            );

            let node = &self.nodes[handle];
            validate!(
                node.prev == prev,
                ValidationError::InvalidBackwardLink {
                    message: format!(
                        "node {handle} points back to {:?}, expected {prev:?}",
                        node.prev
                    )
                }
            );

            count += 1;
            prev = current;
            current = node.next;
        }

        validate!(
            count == self.length,
            ValidationError::LengthMismatch {
                expected: self.length,
                actual: count
            }
        );

        validate!(
            prev == self.tail,
            ValidationError::BoundaryMismatch {
                message: format!("forward walk ended at {prev:?}, tail is {:?}", self.tail)
            }
        );

        // Обратный обход.
        let mut count = 0;
        let mut current = self.tail;
        let mut last = None;

        while let Some(handle) = current {
            validate!(
                count < self.length,
                ValidationError::CyclicReference {
                    message: format!("backward walk passed length {}", self.length)
                }
            );

            count += 1;
            last = current;
            current = self.nodes[handle].prev;
        }

        validate!(
            count == self.length,
            ValidationError::LengthMismatch {
                expected: self.length,
                actual: count
            }
        );

        validate!(
            last == self.head,
            ValidationError::BoundaryMismatch {
                message: format!("backward walk ended at {last:?}, head is {:?}", self.head)
            }
        );

        Ok(())
    }

    /// Проверка границ + поиск узла: возвращает нормализованную позицию и
    /// индекс слота.
    fn locate(
        &self,
        index: isize,
    ) -> Result<(usize, usize), CollectionError> {
        let position = check_bounds(index, self.length).inspect_err(|_| {
            debug!(index, len = self.length, "indexed list: index out of bounds");
        })?;

        let plan = traversal_plan(position, self.length);
        trace!(index, position, ?plan, "indexed list lookup");

        let found = match plan {
            Traversal::Head => self.head,
            Traversal::Tail => self.tail,
            Traversal::Forward(steps) => self.walk(self.head, steps, |n| n.next),
            Traversal::Backward(steps) => self.walk(self.tail, steps, |n| n.prev),
        };

        found
            .map(|handle| (position, handle))
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: self.length,
            })
    }

    fn walk(
        &self,
        start: Link,
        steps: usize,
        step: impl Fn(&Node<T>) -> Link,
    ) -> Link {
        let mut current = start;
        for _ in 0..steps {
            current = current.and_then(|h| step(&self.nodes[h]));
        }
        current
    }

    /// Новая голова списка (список не пуст).
    fn link_front(
        &mut self,
        value: T,
    ) {
        let handle = self.nodes.insert(Node {
            value,
            next: self.head,
            prev: None,
        });

        match self.head {
            Some(head) => self.nodes[head].prev = Some(handle),
            None => self.tail = Some(handle),
        }

        self.head = Some(handle);
        self.length += 1;
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            list: self,
            current: self.head,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для IndexedList
////////////////////////////////////////////////////////////////////////////////

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = &list.nodes[self.current?];
        self.current = node.next;
        Some(&node.value)
    }
}

/// `{ 10 20 30 }`, пустой список — `{ }`.
impl<T: fmt::Display> fmt::Display for IndexedList<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in self.values() {
            write!(f, "{value} ")?;
        }
        write!(f, "}}")
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedList<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
