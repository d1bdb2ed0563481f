//! Icon vocabularies and their terminal glyphs.
//!
//! Each consumer of the catalog resolves icons through one of these
//! closed enums. An icon the renderer does not know about is a compile
//! error, not a blank cell on screen.

use serde::Serialize;

/// Icons shown in the window title bar, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowIcon {
    Terminal,
    Building,
    Settings,
    Folder,
    Disc,
    Cloud,
    Container,
    Chart,
    Wrench,
}

impl WindowIcon {
    pub const ALL: [WindowIcon; 9] = [
        WindowIcon::Terminal,
        WindowIcon::Building,
        WindowIcon::Settings,
        WindowIcon::Folder,
        WindowIcon::Disc,
        WindowIcon::Cloud,
        WindowIcon::Container,
        WindowIcon::Chart,
        WindowIcon::Wrench,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            WindowIcon::Terminal => ">_",
            WindowIcon::Building => "⌂",
            WindowIcon::Settings => "⚙",
            WindowIcon::Folder => "▤",
            WindowIcon::Disc => "◉",
            WindowIcon::Cloud => "☁",
            WindowIcon::Container => "▣",
            WindowIcon::Chart => "▥",
            WindowIcon::Wrench => "⚒",
        }
    }
}

/// Icons on certification cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CertIcon {
    Cloud,
    Container,
    Code,
    Shield,
}

impl CertIcon {
    pub const ALL: [CertIcon; 4] = [
        CertIcon::Cloud,
        CertIcon::Container,
        CertIcon::Code,
        CertIcon::Shield,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            CertIcon::Cloud => "☁",
            CertIcon::Container => "▣",
            CertIcon::Code => "</>",
            CertIcon::Shield => "⛨",
        }
    }
}

/// Icons on skill category headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Cloud,
    Container,
    Terminal,
    Chart,
}

impl CategoryIcon {
    pub const ALL: [CategoryIcon; 4] = [
        CategoryIcon::Cloud,
        CategoryIcon::Container,
        CategoryIcon::Terminal,
        CategoryIcon::Chart,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::Cloud => "☁",
            CategoryIcon::Container => "▣",
            CategoryIcon::Terminal => ">_",
            CategoryIcon::Chart => "▥",
        }
    }
}

/// Icons on individual skill tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Check,
    Box,
    Terminal,
    Chart,
}

impl SkillIcon {
    pub const ALL: [SkillIcon; 4] = [
        SkillIcon::Check,
        SkillIcon::Box,
        SkillIcon::Terminal,
        SkillIcon::Chart,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Check => "✓",
            SkillIcon::Box => "▣",
            SkillIcon::Terminal => ">_",
            SkillIcon::Chart => "▥",
        }
    }
}

/// Icons on project call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaIcon {
    External,
    Github,
    Arrow,
    File,
    Monitor,
    Book,
}

impl CtaIcon {
    pub const ALL: [CtaIcon; 6] = [
        CtaIcon::External,
        CtaIcon::Github,
        CtaIcon::Arrow,
        CtaIcon::File,
        CtaIcon::Monitor,
        CtaIcon::Book,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            CtaIcon::External => "↗",
            CtaIcon::Github => "◆",
            CtaIcon::Arrow => "→",
            CtaIcon::File => "▤",
            CtaIcon::Monitor => "▢",
            CtaIcon::Book => "≡",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_is_non_empty() {
        for icon in WindowIcon::ALL {
            assert!(!icon.glyph().is_empty(), "{:?}", icon);
        }
        for icon in CertIcon::ALL {
            assert!(!icon.glyph().is_empty(), "{:?}", icon);
        }
        for icon in CategoryIcon::ALL {
            assert!(!icon.glyph().is_empty(), "{:?}", icon);
        }
        for icon in SkillIcon::ALL {
            assert!(!icon.glyph().is_empty(), "{:?}", icon);
        }
        for icon in CtaIcon::ALL {
            assert!(!icon.glyph().is_empty(), "{:?}", icon);
        }
    }
}
