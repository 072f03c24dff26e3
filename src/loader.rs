// 📂 Menu Loader - CSV → Vec<MenuItem>
// Header names vary between source files, so each field accepts several aliases

use crate::error::LoadError;
use crate::menu::MenuItem;
use crate::normalizer::{is_canonical_meal, normalize_meal_label, split_list};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// HEADER ALIASES
// ============================================================================

/// Accepted header names per field, highest priority first
pub const ID_ALIASES: &[&str] = &["id", "ID", "번호"];
pub const NAME_ALIASES: &[&str] = &["name", "메뉴", "이름"];
pub const CATEGORY_ALIASES: &[&str] = &["category", "카테고리"];
pub const MEAL_TIMES_ALIASES: &[&str] = &["meal_times", "식사시간"];

/// Column index resolved for each field, `None` when no alias is present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Columns {
    id: Option<usize>,
    name: Option<usize>,
    category: Option<usize>,
    meal_times: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Self {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();

        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| names.iter().position(|name| name == alias))
        };

        Columns {
            id: find(ID_ALIASES),
            name: find(NAME_ALIASES),
            category: find(CATEGORY_ALIASES),
            meal_times: find(MEAL_TIMES_ALIASES),
        }
    }
}

fn cell(record: &StringRecord, column: Option<usize>) -> Option<&str> {
    column.and_then(|idx| record.get(idx))
}

// ============================================================================
// LOADING
// ============================================================================

/// Load the menu table from a CSV file on disk
pub fn load_menus(path: &Path) -> Result<Vec<MenuItem>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let menus = load_menus_from_reader(file)?;
    info!("Loaded {} menu items from {:?}", menus.len(), path);

    Ok(menus)
}

/// Load the menu table from any reader producing UTF-8 CSV with a header row.
///
/// One item per data row, in file order. A non-empty id cell that is not an
/// integer aborts the whole load.
pub fn load_menus_from_reader<R: Read>(reader: R) -> Result<Vec<MenuItem>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns = Columns::resolve(rdr.headers()?);
    debug!("Resolved menu columns: {:?}", columns);

    let mut menus = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        menus.push(parse_row(&record, &columns, line)?);
    }

    Ok(menus)
}

fn parse_row(record: &StringRecord, columns: &Columns, line: u64) -> Result<MenuItem, LoadError> {
    let id = match cell(record, columns.id).map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<i64>().map_err(|_| {
            LoadError::InvalidId {
                line,
                value: raw.to_string(),
            }
        })?),
        _ => None,
    };

    let name = cell(record, columns.name).unwrap_or("").trim().to_string();

    let category = cell(record, columns.category)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from);

    let meal_times = split_list(cell(record, columns.meal_times))
        .iter()
        .map(|part| {
            let label = normalize_meal_label(part);
            if !is_canonical_meal(&label) {
                debug!("Unrecognized meal label {:?} on line {}, kept as-is", label, line);
            }
            label
        })
        .collect();

    Ok(MenuItem {
        id,
        name,
        category,
        meal_times,
    })
}

// ============================================================================
// TESTS
// ============================================================================
