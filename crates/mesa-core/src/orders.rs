#![forbid(unsafe_code)]

//! Kitchen order book with a runtime-selected storage discipline.
//!
//! The counter demo lets the operator switch between four list disciplines
//! at runtime. Every discipline supports the same capability set — add,
//! remove one, list all — but the removal end differs:
//!
//! | Discipline | Backing store       | `remove_one` takes |
//! |------------|---------------------|--------------------|
//! | `List`     | `Vec`               | last added         |
//! | `Stack`    | `Vec` (push/pop)    | top (last added)   |
//! | `Queue`    | `VecDeque`          | front (first added)|
//! | `Linked`   | `LinkedList`        | last added         |
//!
//! Dispatch lives entirely inside [`OrderBook`]; callers never branch on
//! the active discipline. Each discipline keeps its own store, so switching
//! back and forth preserves whatever each structure held.

use std::collections::{LinkedList, VecDeque};

/// One kitchen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// What was ordered.
    pub item: String,
    /// How many.
    pub quantity: u32,
    /// Unit price in cents. Integer so totals never drift.
    pub price_cents: u32,
}

impl Order {
    /// Create a new order line.
    pub fn new(item: impl Into<String>, quantity: u32, price_cents: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
            price_cents,
        }
    }

    /// Line total in cents.
    #[inline]
    pub fn total_cents(&self) -> u64 {
        self.quantity as u64 * self.price_cents as u64
    }
}

/// The four interchangeable storage disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Discipline {
    /// Plain growable list; removal takes the last element.
    #[default]
    List,
    /// LIFO stack.
    Stack,
    /// FIFO queue.
    Queue,
    /// Explicit linked list; removal takes the last element.
    Linked,
}

impl Discipline {
    /// Human-readable name for display.
    pub const fn name(self) -> &'static str {
        match self {
            Discipline::List => "list",
            Discipline::Stack => "stack",
            Discipline::Queue => "queue",
            Discipline::Linked => "linked list",
        }
    }

    /// Parse a discipline name as typed at the prompt.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(Discipline::List),
            "stack" => Some(Discipline::Stack),
            "queue" => Some(Discipline::Queue),
            "linked" => Some(Discipline::Linked),
            _ => None,
        }
    }
}

/// Order collection with centralized per-discipline dispatch.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    active: Discipline,
    list: Vec<Order>,
    stack: Vec<Order>,
    queue: VecDeque<Order>,
    linked: LinkedList<Order>,
}

impl OrderBook {
    /// Create an empty book using the default [`Discipline::List`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active discipline.
    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.active
    }

    /// Switch the active discipline. Existing stores are left untouched.
    pub fn set_discipline(&mut self, discipline: Discipline) {
        self.active = discipline;
    }

    /// Add an order under the active discipline.
    pub fn add(&mut self, order: Order) {
        match self.active {
            Discipline::List => self.list.push(order),
            Discipline::Stack => self.stack.push(order),
            Discipline::Queue => self.queue.push_back(order),
            Discipline::Linked => self.linked.push_back(order),
        }
    }

    /// Remove one order; which end depends on the active discipline.
    ///
    /// Returns `None` when the active store is empty.
    pub fn remove_one(&mut self) -> Option<Order> {
        match self.active {
            Discipline::List => self.list.pop(),
            Discipline::Stack => self.stack.pop(),
            Discipline::Queue => self.queue.pop_front(),
            Discipline::Linked => self.linked.pop_back(),
        }
    }

    /// Snapshot of the active store in storage order.
    pub fn orders(&self) -> Vec<Order> {
        match self.active {
            Discipline::List => self.list.clone(),
            Discipline::Stack => self.stack.clone(),
            Discipline::Queue => self.queue.iter().cloned().collect(),
            Discipline::Linked => self.linked.iter().cloned().collect(),
        }
    }

    /// Number of orders in the active store.
    pub fn len(&self) -> usize {
        match self.active {
            Discipline::List => self.list.len(),
            Discipline::Stack => self.stack.len(),
            Discipline::Queue => self.queue.len(),
            Discipline::Linked => self.linked.len(),
        }
    }

    /// Check if the active store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
