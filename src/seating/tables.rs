/// Free seats per table while a plan is being built
#[derive(Debug, Clone)]
pub struct TableLayout {
    free: Vec<usize>,
}

impl TableLayout {
    pub fn new(tables: usize, seats_per_table: usize) -> Self {
        Self {
            free: vec![seats_per_table; tables],
        }
    }

    pub fn free_seats(&self, table: usize) -> usize {
        self.free.get(table).copied().unwrap_or(0)
    }

    pub fn has_free_seats(&self) -> bool {
        self.free.iter().any(|&f| f > 0)
    }

    /// Picks where a group of `needed` guests starts sitting
    ///
    /// First table that holds the whole group, then the start of the earliest
    /// run of adjacent open tables that holds it together, then the start of
    /// the roomiest run when nothing holds it.
    pub fn starting_table(&self, needed: usize) -> Option<usize> {
        if let Some(table) = self.free.iter().position(|&f| f >= needed) {
            return Some(table);
        }

        (0..self.free.len())
            .find(|&start| self.run_seats(start, needed) >= needed)
            .or_else(|| self.roomiest_run())
    }

    /// Where a split group continues, given the tables it already spans
    /// Neighbours of the span first, then the nearest open table after it, then before it
    pub fn next_open_beside(&self, first: usize, last: usize) -> Option<usize> {
        let open = |t: usize| self.free_seats(t) > 0;

        if last + 1 < self.free.len() && open(last + 1) {
            return Some(last + 1);
        }
        if first > 0 && open(first - 1) {
            return Some(first - 1);
        }
        (last + 1..self.free.len())
            .find(|&t| open(t))
            .or_else(|| (0..first).rev().find(|&t| open(t)))
    }

    /// Free seats in the run of adjacent open tables starting at `start`, counted up to `cap`
    fn run_seats(&self, start: usize, cap: usize) -> usize {
        let mut total = 0;
        for &free in &self.free[start..] {
            if free == 0 || total >= cap {
                break;
            }
            total += free;
        }
        total
    }

    // Earliest start on ties
    fn roomiest_run(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None; // (start, seats)
        for start in 0..self.free.len() {
            let seats = self.run_seats(start, usize::MAX);
            if seats > best.map_or(0, |(_, s)| s) {
                best = Some((start, seats));
            }
        }
        best.map(|(start, _)| start)
    }

    /// Claims up to `wanted` seats at `table`, returns how many were claimed
    pub fn take(&mut self, table: usize, wanted: usize) -> usize {
        match self.free.get_mut(table) {
            Some(free) => {
                let taken = wanted.min(*free);
                *free -= taken;
                taken
            }
            None => 0,
        }
    }
}
