/// Data layer: core types, map loading, and count alignment.
///
/// Architecture:
/// ```text
///  map file (pixel  wavelength)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WavelengthMap
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ WavelengthMap  │  Vec<MappingRow>, pixel range
///   └───────────────┘
///        │                 Frame (pixel → count)
///        ▼                     │
///   ┌──────────┐               │
///   │  filter   │ ◄────────────┘
///   └──────────┘  select counts in pixel range → aligned counts
/// ```
pub mod filter;
pub mod loader;
pub mod model;
