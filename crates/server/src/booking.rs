use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

use crate::state::BookingForm;
use crate::utils::{escape_html, single_line};

fn clean(value: &str) -> String {
    escape_html(&single_line(value))
}

/// One line of the requests file, terminated by `\n`.
pub fn format_booking(form: &BookingForm) -> String {
    format!(
        "Name: {}, Email: {}, Date: {}, Location: {}, Details: {}\n",
        clean(&form.name),
        clean(&form.email),
        clean(&form.date),
        clean(&form.location),
        clean(form.details.as_deref().unwrap_or_default()),
    )
}

pub fn append_booking(
    lock: &Mutex<()>,
    path: &Path,
    form: &BookingForm,
) -> Result<(), std::io::Error> {
    let line = format_booking(form);
    let _guard = lock.lock();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(details: Option<&str>) -> BookingForm {
        BookingForm {
            name: "Jana <script>".to_string(),
            email: "jana@example.com".to_string(),
            date: "2026-12-31".to_string(),
            location: "Brno\nKlub".to_string(),
            details: details.map(str::to_string),
        }
    }

    #[test]
    fn formats_one_escaped_line() {
        assert_eq!(
            format_booking(&form(Some("Two sets"))),
            "Name: Jana &lt;script&gt;, Email: jana@example.com, Date: 2026-12-31, Location: Brno Klub, Details: Two sets\n"
        );
        assert!(format_booking(&form(None)).ends_with("Details: \n"));
    }

    #[test]
    fn appends_without_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("requests.txt");
        let lock = Mutex::new(());
        append_booking(&lock, &path, &form(None)).unwrap();
        append_booking(&lock, &path, &form(Some("again"))).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.lines().nth(1).unwrap().ends_with("Details: again"));
    }
}
