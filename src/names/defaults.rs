//! Built-in historical name variants
//!
//! Finnish and Swedish forms of the same given names as they alternate in
//! 18th and 19th century parish registers. Chains are closed transitively when
//! the index is seeded, so only adjacent pairs are listed.

/// Known given-name variant pairs
pub const DEFAULT_EQUIVALENCES: &[(&str, &str)] = &[
    // Male names
    ("Juho", "Johan"),
    ("Johan", "Johannes"),
    ("Juhana", "Johan"),
    ("Jussi", "Juho"),
    ("Matti", "Mattias"),
    ("Mattias", "Matts"),
    ("Heikki", "Henrik"),
    ("Antti", "Anders"),
    ("Erkki", "Erik"),
    ("Pekka", "Per"),
    ("Per", "Petter"),
    ("Jaakko", "Jakob"),
    ("Tuomas", "Thomas"),
    ("Olli", "Olof"),
    ("Lauri", "Lars"),
    ("Mikko", "Mikael"),
    ("Yrjö", "Georg"),
    ("Yrjö", "Jöran"),
    ("Juuso", "Josef"),
    ("Paavo", "Paul"),
    ("Heikki", "Henrich"),
    ("Niilo", "Nils"),
    ("Kustaa", "Gustaf"),
    ("Simo", "Simon"),
    ("Sakari", "Zacharias"),
    ("Tapani", "Staffan"),
    ("Elias", "Eljas"),
    // Female names
    ("Kaisa", "Katarina"),
    ("Katarina", "Karin"),
    ("Liisa", "Elisabet"),
    ("Elisabet", "Lisa"),
    ("Maria", "Maija"),
    ("Maija", "Maja"),
    ("Valpuri", "Walborg"),
    ("Marketta", "Margareta"),
    ("Riitta", "Brita"),
    ("Kirsti", "Kristina"),
    ("Leena", "Helena"),
    ("Sanna", "Susanna"),
    ("Agneta", "Agneetta"),
    ("Elina", "Elin"),
    ("Anna", "Annika"),
    ("Beata", "Piata"),
    ("Saara", "Sara"),
    ("Kreeta", "Greta"),
    ("Greta", "Margareta"),
];
