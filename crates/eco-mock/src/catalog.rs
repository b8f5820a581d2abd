//! Partner merchants where Ecopoints can be redeemed.

/// One catalog entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Merchant {
    pub name:            &'static str,
    /// Emoji shown next to the name.
    pub icon:            &'static str,
    pub points_required: u64,
}

/// The static partner catalog, in display order.
pub const CATALOG: [Merchant; 4] = [
    Merchant { name: "Líder",       icon: "🛒", points_required: 500 },
    Merchant { name: "Servipag",    icon: "💳", points_required: 300 },
    Merchant { name: "Cinemark",    icon: "🎬", points_required: 700 },
    Merchant { name: "Juan Valdez", icon: "☕", points_required: 200 },
];

/// Find a merchant by name, ignoring ASCII case and surrounding whitespace.
pub fn find_merchant(name: &str) -> Option<&'static Merchant> {
    let name = name.trim();
    CATALOG.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

impl std::fmt::Display for Merchant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} pts)", self.icon, self.name, self.points_required)
    }
}
