//! Registration tab selection

/// Who is registering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationTab {
    #[default]
    Individual,
    SelfEmployed,
    Company,
}

impl RegistrationTab {
    pub const ALL: [RegistrationTab; 3] = [
        RegistrationTab::Individual,
        RegistrationTab::SelfEmployed,
        RegistrationTab::Company,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::SelfEmployed => "Self-employed",
            Self::Company => "Company",
        }
    }

    /// Stable key of the tab
    pub fn key(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::SelfEmployed => "self-employed",
            Self::Company => "company",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Individual => Self::SelfEmployed,
            Self::SelfEmployed => Self::Company,
            Self::Company => Self::Individual,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Individual => Self::Company,
            Self::SelfEmployed => Self::Individual,
            Self::Company => Self::SelfEmployed,
        }
    }
}

/// Exactly one tab is active at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct TabsState {
    active: RegistrationTab,
}

impl TabsState {
    pub fn active(&self) -> RegistrationTab {
        self.active
    }

    pub fn is_active(&self, tab: RegistrationTab) -> bool {
        self.active() == tab
    }

    pub fn select(&mut self, tab: RegistrationTab) {
        self.active = tab;
        tracing::debug!(tab = tab.key(), "selected registration tab");
    }

    pub fn select_next(&mut self) {
        self.select(self.active.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.active.prev());
    }
}
