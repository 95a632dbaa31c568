//! Односвязный список.
//!
//! Тот же контракт индексов, что и у [`IndexedList`](super::IndexedList),
//! но без обратных ссылок: любой поиск идёт от головы вперёд, а удаление
//! хвоста требует полного прохода до предпоследнего узла.

use std::fmt;

use lineal_error::CollectionError;
use tracing::debug;

use super::{arena::Arena, index::check_bounds, ValidationError};
use crate::{debug_assert_invariant, validate};

type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Link,
}

/// Односвязный список: O(index) на любую индексную операцию.
#[derive(Clone)]
pub struct ForwardList<T> {
    nodes: Arena<Node<T>>,
    head: Link,
    tail: Link,
    length: usize,
}

struct Values<'a, T> {
    list: &'a ForwardList<T>,
    current: Link,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<T> ForwardList<T> {
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

    /// Добавляет значение в конец списка (через ссылку на хвост). O(1).
    pub fn append(
        &mut self,
        value: T,
    ) {
        let handle = self.nodes.insert(Node { value, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(handle),
            None => self.head = Some(handle),
        }

        self.tail = Some(handle);
        self.length += 1;
    }

    /// Добавляет значение в начало списка. O(1).
    pub fn push_front(
        &mut self,
        value: T,
    ) {
        let handle = self.nodes.insert(Node {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(handle);
        }

        self.head = Some(handle);
        self.length += 1;
    }

    /// Вставляет значение перед элементом на позиции `index`.
    ///
    /// Контракт совпадает с [`IndexedList::insert`](super::IndexedList::insert).
    pub fn insert(
        &mut self,
        value: T,
        index: isize,
    ) -> Result<(), CollectionError> {
        if self.length == 0 && index == 0 {
            self.append(value);
            return Ok(());
        }

        let position = self.position(index)?;

        if position == 0 {
            self.push_front(value);
            return Ok(());
        }

        let prev = self.predecessor(index, position)?;
        let handle = self.nodes.insert(Node {
            value,
            next: self.nodes[prev].next,
        });

        self.nodes[prev].next = Some(handle);
        self.length += 1;

        Ok(())
    }

    /// Удаляет и возвращает значение на позиции `index`.
    pub fn pop(
        &mut self,
        index: isize,
    ) -> Result<T, CollectionError> {
        let position = self.position(index)?;

        let target = if position == 0 {
            let head = self.head.ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: self.length,
            })?;
            self.head = self.nodes[head].next;
            head
        } else {
            let prev = self.predecessor(index, position)?;
            let target = self.nodes[prev]
                .next
                .ok_or(CollectionError::IndexOutOfBounds {
                    index,
                    len: self.length,
                })?;
            self.nodes[prev].next = self.nodes[target].next;
            if self.tail == Some(target) {
                self.tail = Some(prev);
            }
            target
        };

        let node = self.nodes.remove(target);

        if self.head.is_none() {
            self.tail = None;
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

    /// Удаляет и возвращает первый элемент.
    pub fn shift(&mut self) -> Result<T, CollectionError> {
        self.pop(0)
    }

    /// Удаляет и возвращает последний элемент (полный проход от головы).
    pub fn pop_back(&mut self) -> Result<T, CollectionError> {
        self.pop(-1)
    }

    /// Значение на позиции `index`: последний элемент берётся из ссылки на
    /// хвост, остальные ищутся проходом от головы.
    pub fn value_at(
        &self,
        index: isize,
    ) -> Result<&T, CollectionError> {
        let position = self.position(index)?;
        let found = if position + 1 == self.length {
            self.tail
        } else {
            self.walk(position)
        };

        found
            .map(|handle| &self.nodes[handle].value)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: self.length,
            })
    }

    /// Первый элемент, если список не пуст.
    pub fn first(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].value)
    }

    /// Последний элемент, если список не пуст. O(1).
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

    /// Проверяет, что проход от головы занимает ровно `len` шагов и
    /// заканчивается на хвосте.
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

        let mut count = 0;
        let mut last = None;
        let mut current = self.head;

        while let Some(handle) = current {
            validate!(
                count < self.length,
                ValidationError::CyclicReference {
                    message: format!("forward walk passed length {}", self.length)
                }
            );

            count += 1;
            last = current;
            current = self.nodes[handle].next;
        }

        validate!(
            count == self.length,
            ValidationError::LengthMismatch {
                expected: self.length,
                actual: count
            }
        );

        validate!(
            last == self.tail,
            ValidationError::BoundaryMismatch {
                message: format!("forward walk ended at {last:?}, tail is {:?}", self.tail)
            }
        );

        Ok(())
    }

    fn position(
        &self,
        index: isize,
    ) -> Result<usize, CollectionError> {
        check_bounds(index, self.length).inspect_err(|_| {
            debug!(index, len = self.length, "forward list: index out of bounds");
        })
    }

    /// Узел на позиции `position - 1` (для `position >= 1`).
    fn predecessor(
        &self,
        index: isize,
        position: usize,
    ) -> Result<usize, CollectionError> {
        self.walk(position - 1)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: self.length,
            })
    }

    fn walk(
        &self,
        steps: usize,
    ) -> Link {
        let mut current = self.head;
        for _ in 0..steps {
            current = current.and_then(|h| self.nodes[h].next);
        }
        current
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            list: self,
            current: self.head,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для ForwardList
////////////////////////////////////////////////////////////////////////////////

impl<T> Default for ForwardList<T> {
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

impl<T: fmt::Display> fmt::Display for ForwardList<T> {
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

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
