use std::collections::{vec_deque, VecDeque};

use larder_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::{config::HistoryWindow, food::food_eaten::FoodEaten, types::Tick};

/// The rolling window of a food history, oldest entry first.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodQueue {
    window: HistoryWindow,
    entries: VecDeque<FoodEaten>,
}

impl FoodQueue {
    pub fn new(window: HistoryWindow) -> Self {
        Self {
            window,
            entries: VecDeque::new(),
        }
    }

    pub fn window(&self) -> HistoryWindow {
        self.window
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, FoodEaten> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&FoodEaten> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append a food and evict whatever falls outside the window. Returns
    /// the number of evicted entries.
    pub fn push(&mut self, food: FoodEaten, now: Tick) -> usize {
        self.entries.push_back(food);
        self.trim(now)
    }

    /// Evict entries that fall outside the window at tick `now`
    pub fn trim(&mut self, now: Tick) -> usize {
        let before = self.entries.len();
        match self.window {
            HistoryWindow::Count(limit) => {
                while self.entries.len() > limit as usize {
                    self.entries.pop_front();
                }
            }
            HistoryWindow::Hunger(limit) => {
                let mut total = self.total_hunger();
                // the newest food always stays, even if it alone is over the limit
                while self.entries.len() > 1 && total > u64::from(limit) {
                    if let Some(evicted) = self.entries.pop_front() {
                        total -= u64::from(evicted.values().hunger);
                    }
                }
            }
            HistoryWindow::Time(limit) => {
                while let Some(oldest) = self.entries.front() {
                    if oldest.eaten_at().saturating_add(limit) >= now {
                        break;
                    }
                    self.entries.pop_front();
                }
            }
        }
        before - self.entries.len()
    }

    /// Length of the window in the unit the window is bounded by: entries,
    /// hunger points, or ticks since the oldest entry.
    pub fn length_in_units(&self, now: Tick) -> u64 {
        match self.window {
            HistoryWindow::Count(_) => self.entries.len() as u64,
            HistoryWindow::Hunger(_) => self.total_hunger(),
            HistoryWindow::Time(_) => self
                .entries
                .front()
                .map(|oldest| now.saturating_sub(oldest.eaten_at()))
                .unwrap_or(0),
        }
    }

    fn total_hunger(&self) -> u64 {
        self.entries
            .iter()
            .map(|food| u64::from(food.values().hunger))
            .sum()
    }
}

impl Serde for FoodQueue {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.window.ser(writer);
        (self.entries.len() as u64).ser(writer);
        for food in &self.entries {
            food.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let window = HistoryWindow::de(reader)?;
        let entries: Vec<FoodEaten> = {
            let length = u64::de(reader)?;
            let mut entries = Vec::new();
            for _ in 0..length {
                entries.push(FoodEaten::de(reader)?);
            }
            entries
        };
        Ok(Self {
            window,
            entries: entries.into(),
        })
    }
}
