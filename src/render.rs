//! Plain-text rendering of specification records

use std::fmt::Write as _;

use arkspec::assemble::PagedRecord;
use arkspec::extract::SpecRecord;

const TITLE: &str = "Ark Search Result";

/// "base / max" when both clocks are known
fn clock_speed(record: &SpecRecord) -> Option<String> {
    let base = record.clock_speed.as_deref()?;
    Some(match record.clock_speed_max.as_deref() {
        Some(max) => format!("{base} / {max}"),
        None => base.to_string(),
    })
}

/// Thread count equals core count unless hyperthreading is reported
fn cores_threads(record: &SpecRecord) -> Option<String> {
    let cores = record.core_count.as_deref()?;
    let threads = match record.hyperthreading.as_deref() {
        None | Some("No") => cores,
        Some(_) => record.thread_count.as_deref().unwrap_or(cores),
    };
    Some(format!("{cores} / {threads}"))
}

/// Render one record as a text card
pub fn card(entry: &PagedRecord) -> String {
    let record = &entry.record;
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(
        out,
        "  Product Name: {} <{}>",
        record.processor_number.as_deref().unwrap_or("Unknown"),
        record.url
    );

    let lines = [
        ("Clock Speed", clock_speed(record)),
        ("Cores/Threads", cores_threads(record)),
        ("TDP", record.max_tdp.clone()),
        ("Max Memory", record.max_memory.clone()),
        ("VTD", record.vtd.clone()),
        ("AES Tech", record.aes_tech.clone()),
        ("Sockets", record.sockets_supported.clone()),
    ];
    for (label, value) in lines {
        if let Some(value) = value {
            let _ = writeln!(out, "  {label}: {value}");
        }
    }

    if entry.total > 1 {
        let _ = writeln!(out, "  {} of {}", entry.position, entry.total);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(record: SpecRecord, position: usize, total: usize) -> PagedRecord {
        PagedRecord {
            position,
            total,
            record,
        }
    }

    fn record() -> SpecRecord {
        SpecRecord {
            url: "https://ark.intel.com/p/1.html".to_string(),
            processor_number: Some("i7-9700".to_string()),
            core_count: Some("8".to_string()),
            thread_count: Some("16".to_string()),
            hyperthreading: Some("No".to_string()),
            clock_speed: Some("3.00 GHz".to_string()),
            clock_speed_max: Some("4.70 GHz".to_string()),
            max_tdp: Some("65 W".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_with_footer() {
        let text = card(&paged(record(), 2, 3));
        assert!(text.contains("Product Name: i7-9700 <https://ark.intel.com/p/1.html>"));
        assert!(text.contains("Clock Speed: 3.00 GHz / 4.70 GHz"));
        assert!(text.contains("Cores/Threads: 8 / 8"));
        assert!(text.contains("TDP: 65 W"));
        assert!(!text.contains("Sockets"));
        assert!(text.trim_end().ends_with("2 of 3"));
    }

    #[test]
    fn test_single_card_has_no_footer() {
        let text = card(&paged(record(), 1, 1));
        assert!(!text.contains("1 of 1"));
    }

    #[test]
    fn test_hyperthreading_uses_thread_count() {
        let mut r = record();
        r.hyperthreading = Some("Yes".to_string());
        r.clock_speed_max = None;
        let text = card(&paged(r, 1, 1));
        assert!(text.contains("Cores/Threads: 8 / 16"));
        assert!(text.contains("Clock Speed: 3.00 GHz\n"));
    }

    #[test]
    fn test_sparse_record() {
        let text = card(&paged(SpecRecord::new("https://example.com/x"), 1, 1));
        assert!(text.contains("Product Name: Unknown <https://example.com/x>"));
        assert!(!text.contains("Cores/Threads"));
        assert!(!text.contains("Clock Speed"));
    }
}
