use garden_core::PlantKind;
use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Warm paper-and-soil palette.
pub struct Palette;

impl Palette {
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Palette::INK);
        skin.bold.set_fg(Palette::SOIL);
        skin.italic.set_fg(Palette::MUTED);

        skin.headers[0].set_fg(Palette::SAGE);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Center;

        skin.headers[1].set_fg(Palette::PEACH);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(Palette::MUTED);
        skin.bullet.set_fg(Palette::SAGE);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Palette::ROSE);
        skin.inline_code.set_fg(Palette::SAGE);

        skin
    }

    /// Single-width glyph drawn in the grid for a planted day.
    pub fn plant_glyph(kind: PlantKind) -> char {
        match kind {
            PlantKind::Sprout => ',',
            PlantKind::Flower => '*',
            PlantKind::Fern => '%',
            PlantKind::Tulip => 'Y',
            PlantKind::Daisy => '@',
            PlantKind::Succulent => '&',
            PlantKind::Lavender => '!',
            PlantKind::Mushroom => 'T',
        }
    }

    pub fn plant_color(kind: PlantKind) -> Color {
        match kind {
            PlantKind::Sprout | PlantKind::Fern => Palette::SAGE,
            PlantKind::Flower | PlantKind::Tulip => Palette::ROSE,
            PlantKind::Daisy => Palette::CREAM,
            PlantKind::Succulent => Palette::MOSS,
            PlantKind::Lavender => Palette::LAVENDER,
            PlantKind::Mushroom => Palette::PEACH,
        }
    }

    pub const EMPTY_PAST: char = '·';
    pub const EMPTY_TODAY: char = 'o';
    pub const EMPTY_FUTURE: char = ' ';

    pub const INK: Color = Color::Rgb {
        r: 0x3D,
        g: 0x32,
        b: 0x29,
    }; // #3D3229
    pub const SOIL: Color = Color::Rgb {
        r: 0x6B,
        g: 0x5D,
        b: 0x4D,
    }; // #6B5D4D
    pub const MUTED: Color = Color::Rgb {
        r: 0x8B,
        g: 0x7D,
        b: 0x6B,
    }; // #8B7D6B
    pub const SAGE: Color = Color::Rgb {
        r: 0x8B,
        g: 0x9A,
        b: 0x7C,
    }; // #8B9A7C
    pub const MOSS: Color = Color::Rgb {
        r: 0x5C,
        g: 0x6B,
        b: 0x4D,
    }; // #5C6B4D
    pub const PEACH: Color = Color::Rgb {
        r: 0xE8,
        g: 0xA8,
        b: 0x7C,
    }; // #E8A87C
    pub const ROSE: Color = Color::Rgb {
        r: 0xC9,
        g: 0xA9,
        b: 0xA6,
    }; // #C9A9A6
    pub const CREAM: Color = Color::Rgb {
        r: 0xF5,
        g: 0xE6,
        b: 0xC8,
    }; // #F5E6C8
    pub const LAVENDER: Color = Color::Rgb {
        r: 0xA8,
        g: 0x9B,
        b: 0xC9,
    }; // #A89BC9
    pub const SHADE: Color = Color::Rgb {
        r: 0xB5,
        g: 0xA9,
        b: 0x9A,
    }; // #B5A99A
}
