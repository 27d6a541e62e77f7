//! FAQ accordion state

/// One disclosure item
#[derive(Debug, Clone)]
pub struct AccordionItem {
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub open: bool,
}

impl AccordionItem {
    pub const fn new(title: &'static str, body: &'static [&'static str]) -> Self {
        Self {
            title,
            body,
            open: false,
        }
    }

    /// Rows the item occupies: header plus body lines while open
    pub fn height(&self) -> u16 {
        if self.open {
            1 + self.body.len() as u16
        } else {
            1
        }
    }
}

/// A group of items where at most one is open
#[derive(Debug, Clone)]
pub struct Accordion {
    items: Vec<AccordionItem>,
    /// Keyboard cursor
    pub selected: usize,
}

impl Accordion {
    pub fn new(items: Vec<AccordionItem>) -> Self {
        Self { items, selected: 0 }
    }

    /// Questions shown in the FAQ section
    pub fn faq() -> Self {
        Self::new(vec![
            AccordionItem::new(
                "Who can join the partner program?",
                &[
                    "Individuals, self-employed specialists and companies",
                    "that recommend job seekers or employers.",
                ],
            ),
            AccordionItem::new(
                "How is the reward calculated?",
                &[
                    "You receive a share of every paid service bought",
                    "by clients who registered through your link.",
                ],
            ),
            AccordionItem::new(
                "When are payouts made?",
                &["Payouts are made monthly once the minimum balance is reached."],
            ),
            AccordionItem::new(
                "Do I need a website?",
                &[
                    "No. Share your link in messengers, social networks",
                    "or directly with people you know.",
                ],
            ),
        ])
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip item `index`, closing every other item first
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len() {
            return;
        }
        for (i, item) in self.items.iter_mut().enumerate() {
            if i != index {
                item.open = false;
            }
        }
        let item = &mut self.items[index];
        item.open = !item.open;
        tracing::debug!(open = ?self.open_index(), "toggled faq item");
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn select_next(&mut self) {
        if !self.is_empty() {
            self.selected = (self.selected + 1) % self.len();
        }
    }

    pub fn select_prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn open_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.open)
    }

    /// Item whose header or body covers `row`, counted from the first item
    pub fn item_at_row(&self, row: u16) -> Option<usize> {
        let mut top = 0;
        for (i, item) in self.items.iter().enumerate() {
            let bottom = top + item.height();
            if row < bottom {
                return Some(i);
            }
            top = bottom;
        }
        None
    }

    /// Rows taken by all items
    pub fn height(&self) -> u16 {
        self.items.iter().map(AccordionItem::height).sum()
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::faq()
    }
}
