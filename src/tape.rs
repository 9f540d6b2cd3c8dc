//! The memory tape: unbounded in both directions, one current cell.

/// An unbounded tape of wrapping byte cells with a current-cell cursor.
///
/// A cell exists once the cursor has visited its offset and starts at
/// zero; cells never go away until the whole tape is dropped. Offsets are
/// signed distances from the origin cell: nonnegative offsets live in one
/// growable array and negative offsets in another, so movement is O(1)
/// amortized with no per-cell allocation.
#[derive(Debug)]
pub struct Tape {
    /// Cells at offsets 0, 1, 2, ...
    right: Vec<u8>,
    /// Cells at offsets -1, -2, -3, ...
    left: Vec<u8>,
    cursor: isize,
}

impl Tape {
    /// A fresh tape: one zeroed cell, which is current.
    pub fn new() -> Self {
        Tape {
            right: vec![0],
            left: Vec::new(),
            cursor: 0,
        }
    }

    /// Move the cursor one cell left, creating the cell on first visit.
    pub fn move_left(&mut self) {
        self.cursor -= 1;
        if self.cursor < 0 {
            let index = (-self.cursor - 1) as usize;
            if index >= self.left.len() {
                self.left.push(0);
            }
        }
    }

    /// Move the cursor one cell right, creating the cell on first visit.
    pub fn move_right(&mut self) {
        self.cursor += 1;
        if self.cursor >= 0 {
            let index = self.cursor as usize;
            if index >= self.right.len() {
                self.right.push(0);
            }
        }
    }

    /// Increment the current cell, wrapping 255 -> 0.
    pub fn increment(&mut self) {
        let cell = self.cell_mut();
        *cell = cell.wrapping_add(1);
    }

    /// Decrement the current cell, wrapping 0 -> 255.
    pub fn decrement(&mut self) {
        let cell = self.cell_mut();
        *cell = cell.wrapping_sub(1);
    }

    /// The current cell's value.
    pub fn read(&self) -> u8 {
        if self.cursor >= 0 {
            self.right[self.cursor as usize]
        } else {
            self.left[(-self.cursor - 1) as usize]
        }
    }

    /// Overwrite the current cell.
    pub fn write(&mut self, value: u8) {
        *self.cell_mut() = value;
    }

    fn cell_mut(&mut self) -> &mut u8 {
        if self.cursor >= 0 {
            &mut self.right[self.cursor as usize]
        } else {
            &mut self.left[(-self.cursor - 1) as usize]
        }
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tape_reads_zero() {
        let tape = Tape::new();
        assert_eq!(tape.read(), 0);
    }

    #[test]
    fn cells_are_zero_on_first_visit_in_both_directions() {
        let mut tape = Tape::new();
        tape.write(7);
        tape.move_left();
        assert_eq!(tape.read(), 0);
        tape.move_right();
        tape.move_right();
        assert_eq!(tape.read(), 0);
    }

    #[test]
    fn moving_back_finds_the_same_cell() {
        let mut tape = Tape::new();
        tape.write(42);
        tape.move_left();
        tape.move_left();
        tape.write(9);
        tape.move_right();
        tape.move_right();
        assert_eq!(tape.read(), 42);
        tape.move_left();
        tape.move_left();
        assert_eq!(tape.read(), 9);
    }

    #[test]
    fn increment_and_decrement_wrap_modulo_256() {
        let mut tape = Tape::new();
        tape.decrement();
        assert_eq!(tape.read(), 255);
        tape.increment();
        assert_eq!(tape.read(), 0);
    }

    #[test]
    fn wraparound_law_256_increments_restore_the_cell() {
        let mut tape = Tape::new();
        tape.write(17);
        for _ in 0..256 {
            tape.increment();
        }
        assert_eq!(tape.read(), 17);
        for _ in 0..256 {
            tape.decrement();
        }
        assert_eq!(tape.read(), 17);
    }

    #[test]
    fn deep_left_excursion_keeps_distinct_cells() {
        let mut tape = Tape::new();
        for i in 0..10u8 {
            tape.write(i);
            tape.move_left();
        }
        for i in (0..10u8).rev() {
            tape.move_right();
            assert_eq!(tape.read(), i);
        }
    }
}
