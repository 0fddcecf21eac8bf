/// The X11 color names with their `0xRRGGBB` values
///
/// Order matters: when two entries are equally close to a color the earlier
/// one wins, so canonical spellings come before their aliases.
pub(super) const X11_COLORS: &[(&str, u32)] = &[
    ("Black", 0x000000),
    ("White", 0xffffff),
    ("Red", 0xff0000),
    ("Lime", 0x00ff00),
    ("Blue", 0x0000ff),
    ("Yellow", 0xffff00),
    ("Cyan", 0x00ffff),
    ("Aqua", 0x00ffff),
    ("Magenta", 0xff00ff),
    ("Fuchsia", 0xff00ff),
    ("Gray", 0xbebebe),
    ("Grey", 0xbebebe),
    ("Web Gray", 0x808080),
    ("Silver", 0xc0c0c0),
    ("Dim Gray", 0x696969),
    ("Light Gray", 0xd3d3d3),
    ("Dark Gray", 0xa9a9a9),
    ("Gainsboro", 0xdcdcdc),
    ("White Smoke", 0xf5f5f5),
    ("Slate Gray", 0x708090),
    ("Light Slate Gray", 0x778899),
    ("Dark Slate Gray", 0x2f4f4f),
    ("Maroon", 0xb03060),
    ("Web Maroon", 0x800000),
    ("Dark Red", 0x8b0000),
    ("Brown", 0xa52a2a),
    ("Firebrick", 0xb22222),
    ("Crimson", 0xdc143c),
    ("Indian Red", 0xcd5c5c),
    ("Light Coral", 0xf08080),
    ("Salmon", 0xfa8072),
    ("Dark Salmon", 0xe9967a),
    ("Light Salmon", 0xffa07a),
    ("Tomato", 0xff6347),
    ("Orange Red", 0xff4500),
    ("Coral", 0xff7f50),
    ("Dark Orange", 0xff8c00),
    ("Orange", 0xffa500),
    ("Gold", 0xffd700),
    ("Goldenrod", 0xdaa520),
    ("Dark Goldenrod", 0xb8860b),
    ("Pale Goldenrod", 0xeee8aa),
    ("Light Goldenrod", 0xfafad2),
    ("Khaki", 0xf0e68c),
    ("Dark Khaki", 0xbdb76b),
    ("Light Yellow", 0xffffe0),
    ("Lemon Chiffon", 0xfffacd),
    ("Cornsilk", 0xfff8dc),
    ("Papaya Whip", 0xffefd5),
    ("Moccasin", 0xffe4b5),
    ("Peach Puff", 0xffdab9),
    ("Bisque", 0xffe4c4),
    ("Navajo White", 0xffdead),
    ("Wheat", 0xf5deb3),
    ("Burlywood", 0xdeb887),
    ("Tan", 0xd2b48c),
    ("Rosy Brown", 0xbc8f8f),
    ("Sandy Brown", 0xf4a460),
    ("Peru", 0xcd853f),
    ("Chocolate", 0xd2691e),
    ("Saddle Brown", 0x8b4513),
    ("Sienna", 0xa0522d),
    ("Olive", 0x808000),
    ("Olive Drab", 0x6b8e23),
    ("Dark Olive Green", 0x556b2f),
    ("Yellow Green", 0x9acd32),
    ("Green Yellow", 0xadff2f),
    ("Chartreuse", 0x7fff00),
    ("Lawn Green", 0x7cfc00),
    ("Green", 0x00ff00),
    ("Web Green", 0x008000),
    ("Dark Green", 0x006400),
    ("Forest Green", 0x228b22),
    ("Lime Green", 0x32cd32),
    ("Light Green", 0x90ee90),
    ("Pale Green", 0x98fb98),
    ("Dark Sea Green", 0x8fbc8f),
    ("Medium Sea Green", 0x3cb371),
    ("Sea Green", 0x2e8b57),
    ("Spring Green", 0x00ff7f),
    ("Medium Spring Green", 0x00fa9a),
    ("Medium Aquamarine", 0x66cdaa),
    ("Aquamarine", 0x7fffd4),
    ("Turquoise", 0x40e0d0),
    ("Medium Turquoise", 0x48d1cc),
    ("Dark Turquoise", 0x00ced1),
    ("Pale Turquoise", 0xafeeee),
    ("Light Cyan", 0xe0ffff),
    ("Dark Cyan", 0x008b8b),
    ("Teal", 0x008080),
    ("Light Sea Green", 0x20b2aa),
    ("Cadet Blue", 0x5f9ea0),
    ("Powder Blue", 0xb0e0e6),
    ("Light Blue", 0xadd8e6),
    ("Sky Blue", 0x87ceeb),
    ("Light Sky Blue", 0x87cefa),
    ("Deep Sky Blue", 0x00bfff),
    ("Dodger Blue", 0x1e90ff),
    ("Cornflower", 0x6495ed),
    ("Steel Blue", 0x4682b4),
    ("Light Steel Blue", 0xb0c4de),
    ("Royal Blue", 0x4169e1),
    ("Medium Blue", 0x0000cd),
    ("Dark Blue", 0x00008b),
    ("Navy Blue", 0x000080),
    ("Midnight Blue", 0x191970),
    ("Slate Blue", 0x6a5acd),
    ("Dark Slate Blue", 0x483d8b),
    ("Medium Slate Blue", 0x7b68ee),
    ("Medium Purple", 0x9370db),
    ("Rebecca Purple", 0x663399),
    ("Blue Violet", 0x8a2be2),
    ("Indigo", 0x4b0082),
    ("Dark Orchid", 0x9932cc),
    ("Dark Violet", 0x9400d3),
    ("Medium Orchid", 0xba55d3),
    ("Purple", 0xa020f0),
    ("Web Purple", 0x800080),
    ("Dark Magenta", 0x8b008b),
    ("Orchid", 0xda70d6),
    ("Violet", 0xee82ee),
    ("Plum", 0xdda0dd),
    ("Thistle", 0xd8bfd8),
    ("Lavender", 0xe6e6fa),
    ("Medium Violet Red", 0xc71585),
    ("Violet Red", 0xd02090),
    ("Deep Pink", 0xff1493),
    ("Hot Pink", 0xff69b4),
    ("Pale Violet Red", 0xdb7093),
    ("Pink", 0xffc0cb),
    ("Light Pink", 0xffb6c1),
    ("Misty Rose", 0xffe4e1),
    ("Lavender Blush", 0xfff0f5),
    ("Linen", 0xfaf0e6),
    ("Old Lace", 0xfdf5e6),
    ("Antique White", 0xfaebd7),
    ("Blanched Almond", 0xffebcd),
    ("Beige", 0xf5f5dc),
    ("Seashell", 0xfff5ee),
    ("Floral White", 0xfffaf0),
    ("Ivory", 0xfffff0),
    ("Honeydew", 0xf0fff0),
    ("Mint Cream", 0xf5fffa),
    ("Azure", 0xf0ffff),
    ("Alice Blue", 0xf0f8ff),
    ("Ghost White", 0xf8f8ff),
    ("Snow", 0xfffafa),
];
