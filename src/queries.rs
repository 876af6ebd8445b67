//! Hand-picked search phrases for codes whose reason phrase makes a poor
//! image query. Codes without an entry fall back to the message query.

// Sorted by code; `contextual_query` relies on it.
static CONTEXTUAL_QUERIES: &[(u16, &str)] = &[
    (100, "rabbit running forward"),
    (101, "rabbit jumping over fence"),
    (102, "rabbit eating carrot"),
    (200, "happy rabbit in meadow"),
    (201, "newborn baby bunnies"),
    (202, "rabbit ears up listening"),
    (204, "empty rabbit hutch"),
    (206, "rabbit peeking out of burrow"),
    (301, "rabbit moving house box"),
    (302, "rabbit hopping away"),
    (304, "rabbit sleeping"),
    (307, "rabbit detour path"),
    (400, "confused rabbit"),
    (401, "rabbit behind fence"),
    (402, "rabbit with coins"),
    (403, "rabbit behind locked gate"),
    (404, "rabbit hiding in tall grass"),
    (405, "rabbit turning away"),
    (408, "rabbit waiting patiently"),
    (409, "two rabbits fighting"),
    (410, "empty rabbit burrow"),
    (413, "fat fluffy rabbit"),
    (418, "rabbit with teapot"),
    (420, "relaxed rabbit lying down"),
    (423, "rabbit in cage"),
    (429, "many rabbits crowd"),
    (444, "rabbit silent stare"),
    (499, "rabbit running away"),
    (500, "rabbit chewing cables"),
    (502, "rabbit at garden gate"),
    (503, "sleeping bunny"),
    (504, "rabbit waiting by clock"),
    (507, "rabbit stuffed cheeks"),
    (508, "rabbit chasing its tail"),
];

pub fn contextual_query(code: u16) -> Option<&'static str> {
    CONTEXTUAL_QUERIES
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|i| CONTEXTUAL_QUERIES[i].1)
}
