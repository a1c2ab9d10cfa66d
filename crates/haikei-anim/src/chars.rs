//! Character constants for the animation surface.

/// Glyphs used by the matrix rain animation.
pub const RAIN_CHARS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Shade ramp used when presenting accumulated light as cells, faintest
/// first.
pub const SHADE_CHARS: &[char] = &['·', '░', '▒', '▓', '█'];
