//! Арена узлов со стабильными индексами.
//!
//! Узлы списков хранятся в одном векторе; связи между узлами — это индексы
//! слотов, а не указатели. Освобождённые слоты образуют односвязный список
//! свободных мест и переиспользуются при следующих вставках.

use std::ops::{Index, IndexMut};

/// Слот арены: занятый узел или звено списка свободных слотов.
#[derive(Debug, Clone)]
enum Slot<N> {
    Vacant { next_free: Option<usize> },
    Occupied(N),
}

/// Владелец всех узлов одной коллекции.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    next_free: Option<usize>,
    occupied: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_free: None,
            occupied: 0,
        }
    }

    /// Кладёт узел в свободный слот (или в конец) и возвращает его индекс.
    pub(crate) fn insert(
        &mut self,
        node: N,
    ) -> usize {
        self.occupied += 1;

        if let Some(idx) = self.next_free {
            if let Slot::Vacant { next_free } = &self.slots[idx] {
                self.next_free = *next_free;
                self.slots[idx] = Slot::Occupied(node);
                return idx;
            }
        }

        self.slots.push(Slot::Occupied(node));
        self.slots.len() - 1
    }

    /// Забирает узел из слота и возвращает слот в список свободных.
    ///
    /// Паникует, если слот уже свободен.
    pub(crate) fn remove(
        &mut self,
        idx: usize,
    ) -> N {
        let vacant = Slot::Vacant {
            next_free: self.next_free,
        };

        match std::mem::replace(&mut self.slots[idx], vacant) {
            Slot::Occupied(node) => {
                self.next_free = Some(idx);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { next_free } => {
                self.slots[idx] = Slot::Vacant { next_free };
                panic!("vacant arena slot {idx}");
            }
        }
    }

    pub(crate) fn get(
        &self,
        idx: usize,
    ) -> Option<&N> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(
        &mut self,
        idx: usize,
    ) -> Option<&mut N> {
        match self.slots.get_mut(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Кол-во занятых слотов.
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    /// Освобождает все узлы разом.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_free = None;
        self.occupied = 0;
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для Arena
////////////////////////////////////////////////////////////////////////////////

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<usize> for Arena<N> {
    type Output = N;

    fn index(
        &self,
        idx: usize,
    ) -> &N {
        match self.get(idx) {
            Some(node) => node,
            None => panic!("vacant arena slot {idx}"),
        }
    }
}

impl<N> IndexMut<usize> for Arena<N> {
    fn index_mut(
        &mut self,
        idx: usize,
    ) -> &mut N {
        match self.get_mut(idx) {
            Some(node) => node,
            None => panic!("vacant arena slot {idx}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
