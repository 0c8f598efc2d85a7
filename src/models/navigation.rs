/// Entries in the side navigation, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuItem {
    #[default]
    Dashboard,
    Models,
    Comparison,
    Recommendations,
    Reports,
    Settings,
}

/// Screens that actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Dashboard,
    Comparison,
    Recommendations,
    Reports,
}

impl MenuItem {
    pub fn all() -> &'static [MenuItem] {
        &[
            MenuItem::Dashboard,
            MenuItem::Models,
            MenuItem::Comparison,
            MenuItem::Recommendations,
            MenuItem::Reports,
            MenuItem::Settings,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "dashboard",
            MenuItem::Models => "models",
            MenuItem::Comparison => "comparison",
            MenuItem::Recommendations => "recommendations",
            MenuItem::Reports => "reports",
            MenuItem::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "Dashboard",
            MenuItem::Models => "Models",
            MenuItem::Comparison => "Comparison",
            MenuItem::Recommendations => "Recommendations",
            MenuItem::Reports => "Reports",
            MenuItem::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "▦",
            MenuItem::Models => "🍃",
            MenuItem::Comparison => "⇄",
            MenuItem::Recommendations => "💡",
            MenuItem::Reports => "📄",
            MenuItem::Settings => "⚙",
        }
    }

    /// Screen mounted for this item. Items without a screen show the dashboard.
    pub fn screen(&self) -> Screen {
        match self {
            MenuItem::Comparison => Screen::Comparison,
            MenuItem::Recommendations => Screen::Recommendations,
            MenuItem::Reports => Screen::Reports,
            MenuItem::Dashboard | MenuItem::Models | MenuItem::Settings => Screen::Dashboard,
        }
    }
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
