//! Renders the catalog as the plain-text block embedded in the advisor prompt.

use crate::catalog::{FacultyCatalog, FacultyRecord};

/// Renders every record in catalog order, one block per faculty member.
pub fn render_catalog(catalog: &FacultyCatalog) -> String {
    let mut out = String::new();
    for record in catalog.iter() {
        render_record(&mut out, record);
    }
    out
}

fn render_record(out: &mut String, record: &FacultyRecord) {
    let expertise = if record.expertise.is_empty() {
        "not listed".to_string()
    } else {
        record.expertise.join(", ")
    };
    out.push_str(&format!(
        "Faculty member:\n{}\n    website: {}\n    expertise: {}\n\n",
        record.name, record.profile_url, expertise
    ));
}
