//! Marker-Kategorien: Farbvarianten (Kreis-Modus) oder Icon-Typen (Icon-Modus).
//!
//! Pro Deployment ist genau ein Kategorisierungs-Schema aktiv. Beide Schemata
//! sind Varianten derselben "Marker-Dekoration".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aktives Kategorisierungs-Schema (wird beim Start festgelegt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryScheme {
    /// Einfache Kreis-Marker mit Füllfarbe
    #[default]
    Color,
    /// Icon-Marker (`cave | claim | resource`)
    Icon,
}

/// Füllfarbe eines Kreis-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkerColor {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl MarkerColor {
    /// Alle Farben in Paletten-Reihenfolge.
    pub const ALL: [MarkerColor; 6] = [
        MarkerColor::Blue,
        MarkerColor::Red,
        MarkerColor::Green,
        MarkerColor::Yellow,
        MarkerColor::Orange,
        MarkerColor::Purple,
    ];

    /// Persistierte Hex-Darstellung (`#RRGGBB`).
    pub fn hex(self) -> &'static str {
        match self {
            MarkerColor::Blue => "#0000FF",
            MarkerColor::Red => "#FF0000",
            MarkerColor::Green => "#00FF00",
            MarkerColor::Yellow => "#FFFF00",
            MarkerColor::Orange => "#FFA500",
            MarkerColor::Purple => "#800080",
        }
    }

    /// RGB-Komponenten der Füllfarbe.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            MarkerColor::Blue => [0x00, 0x00, 0xFF],
            MarkerColor::Red => [0xFF, 0x00, 0x00],
            MarkerColor::Green => [0x00, 0xFF, 0x00],
            MarkerColor::Yellow => [0xFF, 0xFF, 0x00],
            MarkerColor::Orange => [0xFF, 0xA5, 0x00],
            MarkerColor::Purple => [0x80, 0x00, 0x80],
        }
    }

    /// Anzeigename für Toolbar und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            MarkerColor::Blue => "Blau",
            MarkerColor::Red => "Rot",
            MarkerColor::Green => "Grün",
            MarkerColor::Yellow => "Gelb",
            MarkerColor::Orange => "Orange",
            MarkerColor::Purple => "Lila",
        }
    }

    /// Löst eine gespeicherte Farbe auf.
    ///
    /// Akzeptiert `#RRGGBB` (Groß-/Kleinschreibung egal) und die CSS-Namen
    /// der Palettenfarben, wie sie ältere Datensätze enthalten.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|color| {
            color.hex().eq_ignore_ascii_case(raw) || color.css_name().eq_ignore_ascii_case(raw)
        })
    }

    fn css_name(self) -> &'static str {
        match self {
            MarkerColor::Blue => "blue",
            MarkerColor::Red => "red",
            MarkerColor::Green => "lime",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Orange => "orange",
            MarkerColor::Purple => "purple",
        }
    }
}

/// Icon-Typ im Icon-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconType {
    #[default]
    Cave,
    Claim,
    Resource,
}

impl IconType {
    /// Alle Icon-Typen in Paletten-Reihenfolge.
    pub const ALL: [IconType; 3] = [IconType::Cave, IconType::Claim, IconType::Resource];

    /// Persistierter Bezeichner (`"cave"`, `"claim"`, `"resource"`).
    pub fn as_str(self) -> &'static str {
        match self {
            IconType::Cave => "cave",
            IconType::Claim => "claim",
            IconType::Resource => "resource",
        }
    }

    /// Anzeigename für Toolbar und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            IconType::Cave => "Höhle",
            IconType::Claim => "Claim",
            IconType::Resource => "Ressource",
        }
    }

    /// Löst einen gespeicherten Bezeichner auf.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Kategorie eines Markers. Genau eine Variante ist pro Deployment aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Color(MarkerColor),
    Icon(IconType),
}

const COLOR_PALETTE: [Category; 6] = [
    Category::Color(MarkerColor::Blue),
    Category::Color(MarkerColor::Red),
    Category::Color(MarkerColor::Green),
    Category::Color(MarkerColor::Yellow),
    Category::Color(MarkerColor::Orange),
    Category::Color(MarkerColor::Purple),
];

const ICON_PALETTE: [Category; 3] = [
    Category::Icon(IconType::Cave),
    Category::Icon(IconType::Claim),
    Category::Icon(IconType::Resource),
];

impl Category {
    /// Schema, zu dem diese Kategorie gehört.
    pub fn scheme(self) -> CategoryScheme {
        match self {
            Category::Color(_) => CategoryScheme::Color,
            Category::Icon(_) => CategoryScheme::Icon,
        }
    }

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            Category::Color(color) => color.label(),
            Category::Icon(icon) => icon.label(),
        }
    }

    /// Persistierter Bezeichner (Hex-Farbe oder Icon-Typ).
    pub fn storage_name(self) -> &'static str {
        match self {
            Category::Color(color) => color.hex(),
            Category::Icon(icon) => icon.as_str(),
        }
    }

    /// Visuelle Dekoration, mit der die View den Marker darstellt.
    pub fn decoration(self) -> Decoration {
        match self {
            Category::Color(color) => Decoration::Circle { fill: color.rgb() },
            Category::Icon(icon) => Decoration::Icon(icon),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_name())
    }
}

impl CategoryScheme {
    /// Paletten-Einträge des Schemas in fester Reihenfolge.
    pub fn palette(self) -> &'static [Category] {
        match self {
            CategoryScheme::Color => &COLOR_PALETTE,
            CategoryScheme::Icon => &ICON_PALETTE,
        }
    }

    /// Erster Paletten-Eintrag; Fallback für fehlende oder unbekannte Kategorien.
    pub fn default_category(self) -> Category {
        self.palette()[0]
    }

    /// Löst einen gespeicherten Kategorie-Bezeichner innerhalb dieses Schemas auf.
    pub fn resolve(self, raw: &str) -> Option<Category> {
        match self {
            CategoryScheme::Color => MarkerColor::parse(raw).map(Category::Color),
            CategoryScheme::Icon => IconType::parse(raw).map(Category::Icon),
        }
    }

    /// Bildet eine Kategorie auf dieses Schema ab (fremdes Schema → Default).
    pub fn coerce(self, category: Category) -> Category {
        if category.scheme() == self {
            category
        } else {
            self.default_category()
        }
    }

    /// Gibt `true` zurück, wenn die Kategorie Teil dieses Schemas ist.
    pub fn contains(self, category: Category) -> bool {
        category.scheme() == self
    }
}

/// Visuelle Dekoration eines Markers, wie sie die Karten-View rendert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// Kreis mit Füllfarbe (RGB)
    Circle { fill: [u8; 3] },
    /// Icon-Symbol
    Icon(IconType),
}
