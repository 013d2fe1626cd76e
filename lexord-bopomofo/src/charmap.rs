//! Bopomofo character table: symbols and tone marks to packed components.

use crate::syllable::Syllable;

/// Component bits for one Bopomofo symbol or tone mark.
pub fn component(c: char) -> Option<u16> {
    let component = match c {
        'ㄅ' => Syllable::B,
        'ㄆ' => Syllable::P,
        'ㄇ' => Syllable::M,
        'ㄈ' => Syllable::F,
        'ㄉ' => Syllable::D,
        'ㄊ' => Syllable::T,
        'ㄋ' => Syllable::N,
        'ㄌ' => Syllable::L,
        'ㄍ' => Syllable::G,
        'ㄎ' => Syllable::K,
        'ㄏ' => Syllable::H,
        'ㄐ' => Syllable::J,
        'ㄑ' => Syllable::Q,
        'ㄒ' => Syllable::X,
        'ㄓ' => Syllable::ZH,
        'ㄔ' => Syllable::CH,
        'ㄕ' => Syllable::SH,
        'ㄖ' => Syllable::R,
        'ㄗ' => Syllable::Z,
        'ㄘ' => Syllable::C,
        'ㄙ' => Syllable::S,
        'ㄧ' => Syllable::I,
        'ㄨ' => Syllable::U,
        'ㄩ' => Syllable::UE,
        'ㄚ' => Syllable::A,
        'ㄛ' => Syllable::O,
        'ㄜ' => Syllable::ER,
        'ㄝ' => Syllable::E,
        'ㄞ' => Syllable::AI,
        'ㄟ' => Syllable::EI,
        'ㄠ' => Syllable::AO,
        'ㄡ' => Syllable::OU,
        'ㄢ' => Syllable::AN,
        'ㄣ' => Syllable::EN,
        'ㄤ' => Syllable::ANG,
        'ㄥ' => Syllable::ENG,
        'ㄦ' => Syllable::ERR,
        'ˊ' => Syllable::TONE_2,
        'ˇ' => Syllable::TONE_3,
        'ˋ' => Syllable::TONE_4,
        '˙' => Syllable::TONE_5,
        _ => return None,
    };
    Some(component)
}

/// Symbol for one component; `None` for tone 1 and unassigned bits.
pub fn character(component: u16) -> Option<char> {
    let c = match component {
        Syllable::B => 'ㄅ',
        Syllable::P => 'ㄆ',
        Syllable::M => 'ㄇ',
        Syllable::F => 'ㄈ',
        Syllable::D => 'ㄉ',
        Syllable::T => 'ㄊ',
        Syllable::N => 'ㄋ',
        Syllable::L => 'ㄌ',
        Syllable::G => 'ㄍ',
        Syllable::K => 'ㄎ',
        Syllable::H => 'ㄏ',
        Syllable::J => 'ㄐ',
        Syllable::Q => 'ㄑ',
        Syllable::X => 'ㄒ',
        Syllable::ZH => 'ㄓ',
        Syllable::CH => 'ㄔ',
        Syllable::SH => 'ㄕ',
        Syllable::R => 'ㄖ',
        Syllable::Z => 'ㄗ',
        Syllable::C => 'ㄘ',
        Syllable::S => 'ㄙ',
        Syllable::I => 'ㄧ',
        Syllable::U => 'ㄨ',
        Syllable::UE => 'ㄩ',
        Syllable::A => 'ㄚ',
        Syllable::O => 'ㄛ',
        Syllable::ER => 'ㄜ',
        Syllable::E => 'ㄝ',
        Syllable::AI => 'ㄞ',
        Syllable::EI => 'ㄟ',
        Syllable::AO => 'ㄠ',
        Syllable::OU => 'ㄡ',
        Syllable::AN => 'ㄢ',
        Syllable::EN => 'ㄣ',
        Syllable::ANG => 'ㄤ',
        Syllable::ENG => 'ㄥ',
        Syllable::ERR => 'ㄦ',
        Syllable::TONE_2 => 'ˊ',
        Syllable::TONE_3 => 'ˇ',
        Syllable::TONE_4 => 'ˋ',
        Syllable::TONE_5 => '˙',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every Bopomofo symbol and tone mark in the table.
    const SYMBOLS: &str = "ㄅㄆㄇㄈㄉㄊㄋㄌㄍㄎㄏㄐㄑㄒㄓㄔㄕㄖㄗㄘㄙㄧㄨㄩㄚㄛㄜㄝㄞㄟㄠㄡㄢㄣㄤㄥㄦˊˇˋ˙";

    #[test]
    fn every_symbol_maps_both_ways() {
        for c in SYMBOLS.chars() {
            let comp = component(c).unwrap_or_else(|| panic!("no component for {c}"));
            assert_eq!(character(comp), Some(c));
        }
    }

    #[test]
    fn table_has_forty_one_entries() {
        assert_eq!(SYMBOLS.chars().count(), 41);
    }

    #[test]
    fn unknown_inputs_have_no_mapping() {
        assert_eq!(component('a'), None);
        assert_eq!(component(' '), None);
        assert_eq!(character(0), None);
        assert_eq!(character(Syllable::TONE_1), None);
        assert_eq!(character(0x3fff), None);
    }
}
