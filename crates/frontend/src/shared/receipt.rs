//! Client-side booking receipt generation.
//!
//! Builds a minimal single-page PDF by hand (catalog, page tree, one content
//! stream, two standard Helvetica fonts) and hands it to the blob download
//! helper. The PDF subset used here needs no compression or encoding tables.

use contracts::domain::booking::Booking;

use crate::shared::date_utils::{format_date, format_time};
use crate::shared::export::download_bytes;

const PAGE_WIDTH: f64 = 612.0;
const PAGE_HEIGHT: f64 = 792.0;
const MARGIN: f64 = 72.0;

/// Build the receipt and trigger a browser download.
pub fn download_receipt(booking: &Booking) -> Result<(), String> {
    let pdf = build_receipt_pdf(booking);
    download_bytes(
        &pdf,
        "application/pdf",
        &format!("booking_receipt_{}.pdf", booking.id),
    )
}

/// Assemble the receipt PDF bytes for a booking.
pub fn build_receipt_pdf(booking: &Booking) -> Vec<u8> {
    let content = build_content_stream(booking);

    let objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 5 0 R /F2 6 0 R >> >> /Contents 4 0 R >>"
        ),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets: Vec<usize> = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

fn build_content_stream(booking: &Booking) -> String {
    let mut lines: Vec<(String, String)> = vec![
        ("Booking ID".into(), booking.id.to_string()),
        ("Name".into(), booking.name.clone()),
        ("Phone".into(), booking.phone.clone()),
        ("Email".into(), booking.email.clone()),
        ("Event type".into(), booking.event_type.label().to_string()),
        (
            "Event dates".into(),
            format!(
                "{} - {}",
                format_date(booking.from_date),
                format_date(booking.to_date)
            ),
        ),
        ("Status".into(), booking.status.label().to_string()),
    ];
    if let (Some(start), Some(end)) = (booking.start_time, booking.end_time) {
        lines.push((
            "Timing".into(),
            format!("{} - {}", format_time(start), format_time(end)),
        ));
    }
    match (&booking.city, &booking.state) {
        (Some(city), Some(state)) => lines.push(("City".into(), format!("{city}, {state}"))),
        (Some(city), None) => lines.push(("City".into(), city.clone())),
        (None, Some(state)) => lines.push(("City".into(), state.clone())),
        (None, None) => {}
    }
    if let Some(guests) = booking.estimated_guests {
        lines.push(("Estimated guests".into(), guests.to_string()));
    }
    if let Some(pref) = booking.food_preference {
        lines.push(("Food preference".into(), pref.as_str().to_string()));
    }

    let mut stream = String::new();
    let title_y = PAGE_HEIGHT - MARGIN;
    stream.push_str(&format!(
        "BT\n/F1 20 Tf\n{MARGIN} {title_y} Td\n({}) Tj\nET\n",
        escape_pdf_text("Booking Receipt")
    ));

    let mut y = title_y - 40.0;
    for (label, value) in &lines {
        stream.push_str(&format!(
            "BT\n/F1 11 Tf\n{MARGIN} {y} Td\n({}) Tj\nET\n",
            escape_pdf_text(label)
        ));
        let value_x = MARGIN + 150.0;
        stream.push_str(&format!(
            "BT\n/F2 11 Tf\n{value_x} {y} Td\n({}) Tj\nET\n",
            escape_pdf_text(value)
        ));
        y -= 20.0;
    }

    stream
}

/// Escape characters that delimit PDF string literals.
fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            // Literal strings carry Latin-1 only; anything wider is replaced.
            c if (c as u32) < 256 => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use contracts::domain::booking::{Booking, BookingStatus, EventType, FoodPreference};

    fn sample_booking() -> Booking {
        Booking {
            id: 42,
            name: "Arjun Rao (family)".into(),
            phone: "9876543210".into(),
            alternate_phone: None,
            email: "arjun@example.com".into(),
            event_type: EventType::Wedding,
            from_date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0),
            end_time: NaiveTime::from_hms_opt(22, 0, 0),
            address_line: Some("12 Lake Road".into()),
            state: Some("Karnataka".into()),
            city: Some("Bengaluru".into()),
            pincode: Some("560001".into()),
            message: None,
            estimated_guests: Some(350),
            food_preference: Some(FoodPreference::Veg),
            status: BookingStatus::Approved,
            created_at: None,
        }
    }

    #[test]
    fn pdf_has_header_trailer_and_objects() {
        let pdf = build_receipt_pdf(&sample_booking());
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("6 0 obj"));
        assert!(text.contains("(Booking Receipt) Tj"));
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let pdf = build_receipt_pdf(&sample_booking());
        let text = String::from_utf8_lossy(&pdf).to_string();
        let xref_pos = text.find("xref\n").unwrap();
        let entries: Vec<&str> = text[xref_pos..]
            .lines()
            .skip(2) // "xref" and "0 7"
            .take(7)
            .collect();
        assert_eq!(entries[0], "0000000000 65535 f ");
        for (i, entry) in entries.iter().skip(1).enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(text[offset..].starts_with(&expected));
        }
    }

    #[test]
    fn startxref_matches_xref_position() {
        let pdf = build_receipt_pdf(&sample_booking());
        let text = String::from_utf8_lossy(&pdf).to_string();
        let xref_pos = text.find("xref\n").unwrap();
        assert!(text.contains(&format!("startxref\n{}\n%%EOF", xref_pos)));
    }

    #[test]
    fn escapes_parentheses_in_names() {
        let pdf = build_receipt_pdf(&sample_booking());
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains("Arjun Rao \\(family\\)"));
    }
}
