use bitflags::bitflags;

bitflags! {
    /// Franchise brands a clip belongs to; several may be set at once
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BrandType: u32 {
        const IMAS = 1 << 0;
        const DS = 1 << 1;
        const CINDERELLA = 1 << 2;
        const MILLION = 1 << 3;
        const SIDEM = 1 << 4;
        const SHINY = 1 << 5;
        const VALIV = 1 << 6;
        const GAKUEN = 1 << 7;
        const GOUDOU = 1 << 8;
        const OTHER = 1 << 9;
    }
}

/// Separator used when rendering several brands as one string
pub const BRAND_SEPARATOR: &str = ", ";

/// Display labels in rendering order
const BRAND_LABELS: [(BrandType, &str); 10] = [
    (BrandType::IMAS, "765PRO AS"),
    (BrandType::DS, "ディアリースターズ"),
    (BrandType::CINDERELLA, "シンデレラガールズ"),
    (BrandType::MILLION, "ミリオンライブ！"),
    (BrandType::SIDEM, "SideM"),
    (BrandType::SHINY, "シャイニーカラーズ"),
    (BrandType::VALIV, "ヴイアライヴ"),
    (BrandType::GAKUEN, "学園アイドルマスター"),
    (BrandType::GOUDOU, "合同ライブ"),
    (BrandType::OTHER, "その他"),
];

impl BrandType {
    /// Single-flag values paired with their labels, in rendering order
    pub fn labeled() -> impl Iterator<Item = (BrandType, &'static str)> {
        BRAND_LABELS.into_iter()
    }

    /// Labels of every set flag, in rendering order
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        Self::labeled().filter(move |(flag, _)| self.contains(*flag)).map(|(_, label)| label)
    }

    /// Combined display string, e.g. `シンデレラガールズ, ミリオンライブ！`
    ///
    /// The empty set renders as an empty string.
    pub fn display_string(self) -> String {
        self.labels().collect::<Vec<_>>().join(BRAND_SEPARATOR)
    }

    /// Resolve a single label back to its flag (exact match)
    pub fn from_display(label: &str) -> Option<Self> {
        Self::labeled().find(|(_, l)| *l == label).map(|(flag, _)| flag)
    }
}
