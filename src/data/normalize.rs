use super::model::{Course, RawRow};

/// Column headers read from the source. Lookup is case-sensitive.
pub const TITLE_COLUMN: &str = "Title";
pub const NAME_COLUMN: &str = "Name";
pub const DESCRIPTION_COLUMN: &str = "Description";
pub const ZONE_COLUMN: &str = "Knowledge zone";
pub const SECTION_COLUMN: &str = "Section";

/// First non-empty text among `columns`, or an empty string.
fn first_text(row: &RawRow, columns: &[&str]) -> String {
    columns
        .iter()
        .find_map(|col| row.get(*col).and_then(|cell| cell.as_text()))
        .unwrap_or_default()
}

/// Map one raw row onto a [`Course`]. Missing fields become empty strings.
pub fn normalize_row(index: usize, row: &RawRow) -> Course {
    Course {
        id: index.to_string(),
        title: first_text(row, &[TITLE_COLUMN, NAME_COLUMN]),
        description: first_text(row, &[DESCRIPTION_COLUMN]),
        knowledge_zone: first_text(row, &[ZONE_COLUMN]),
        section: first_text(row, &[SECTION_COLUMN]),
    }
}

/// Normalize every row in source order; ids follow row position.
pub fn normalize_rows<I>(rows: I) -> Vec<Course>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| normalize_row(index, &row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::String(v.to_string())))
            .collect()
    }

    #[test]
    fn title_falls_back_to_name() {
        let course = normalize_row(3, &row(&[("Name", "Panel Literacy")]));
        assert_eq!(course.id, "3");
        assert_eq!(course.title, "Panel Literacy");
    }

    #[test]
    fn title_wins_over_name() {
        let course = normalize_row(0, &row(&[("Title", "A"), ("Name", "B")]));
        assert_eq!(course.title, "A");
    }

    #[test]
    fn missing_title_and_name_give_empty_title_and_slug() {
        let course = normalize_row(0, &row(&[("Description", "orphan")]));
        assert_eq!(course.title, "");
        assert_eq!(course.slug(), "");
        assert_eq!(course.description, "orphan");
        assert_eq!(course.knowledge_zone, "");
        assert_eq!(course.section, "");
    }

    #[test]
    fn column_lookup_is_case_sensitive() {
        let course = normalize_row(0, &row(&[("title", "A"), ("knowledge zone", "AI")]));
        assert_eq!(course.title, "");
        assert_eq!(course.knowledge_zone, "");
    }

    #[test]
    fn numeric_cells_are_rendered_as_text() {
        let mut raw = row(&[("Title", "Forecasting")]);
        raw.insert("Section".into(), CellValue::Float(2.0));
        assert_eq!(normalize_row(0, &raw).section, "2");
    }

    #[test]
    fn ids_follow_row_order() {
        let courses = normalize_rows(vec![row(&[("Title", "A")]), row(&[("Title", "B")])]);
        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["0", "1"]);
    }
}
