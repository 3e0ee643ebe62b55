//! Demo seed data
//!
//! Venues across Beograd, Novi Sad and Kragujevac in both industries. Dates
//! are relative to the day the store is seeded.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use shared::models::{City, Industry, Shift, ShiftDetails};

/// One seed row. Avatars are resolved against the picsum placeholder service.
struct SeedRow {
    id: &'static str,
    venue_id: &'static str,
    venue_name: &'static str,
    department: Option<&'static str>,
    avatar_seed: &'static str,
    distance: &'static str,
    day_offset: i64,
    hours: (&'static str, &'static str),
    role: &'static str,
    pay: u32,
    industry: Industry,
    city: City,
}

#[allow(clippy::too_many_arguments)]
const fn row(
    id: &'static str,
    venue_id: &'static str,
    venue_name: &'static str,
    department: Option<&'static str>,
    avatar_seed: &'static str,
    distance: &'static str,
    day_offset: i64,
    hours: (&'static str, &'static str),
    role: &'static str,
    pay: u32,
    industry: Industry,
    city: City,
) -> SeedRow {
    SeedRow {
        id,
        venue_id,
        venue_name,
        department,
        avatar_seed,
        distance,
        day_offset,
        hours,
        role,
        pay,
        industry,
        city,
    }
}

static DEMO_ROWS: &[SeedRow] = &[
    row("b1", "bv1", "Kafeterija Vračar", None, "cafe1", "1.2 km", 0, ("08:00", "16:00"), "Bartender", 35, Industry::Hospitality, City::Beograd),
    row("b2", "bv2", "Red Bar", None, "bar1", "0.8 km", 1, ("18:00", "02:00"), "Waiter", 40, Industry::Hospitality, City::Beograd),
    row("b3", "bv3", "Destino", None, "destino", "1.5 km", 2, ("12:00", "20:00"), "Konobar", 38, Industry::Hospitality, City::Beograd),
    row("b4", "bv4", "Zrno", None, "zrno", "0.5 km", 0, ("07:30", "15:30"), "Barista", 32, Industry::Hospitality, City::Beograd),
    row("b5", "bv5", "CentralPub", None, "centralpub", "2.1 km", -1, ("19:00", "03:00"), "Šanker", 45, Industry::Hospitality, City::Beograd),
    row("b6", "bv6", "PizzaBar", None, "pizzabar", "1.1 km", 1, ("11:00", "19:00"), "Pomoćni radnik", 30, Industry::Hospitality, City::Beograd),
    row("b7", "bv7", "Venecija", None, "venecija", "3.2 km", 3, ("13:00", "21:00"), "Konobar", 42, Industry::Hospitality, City::Beograd),
    row("b8", "bv8", "Moonze", None, "moonze", "4.5 km", 0, ("20:00", "04:00"), "Šanker", 48, Industry::Hospitality, City::Beograd),
    row("b9", "bv9", "Madera", None, "madera", "1.0 km", 0, ("12:00", "22:00"), "Konobar", 50, Industry::Hospitality, City::Beograd),
    row("b10", "bv10", "Franš", None, "frans", "2.5 km", 0, ("13:00", "23:00"), "Hostesa", 45, Industry::Hospitality, City::Beograd),
    row("b11", "bv11", "Lorenzo & Kakalamba", None, "lorenzo", "1.8 km", 0, ("12:00", "20:00"), "Konobar", 40, Industry::Hospitality, City::Beograd),
    row("b12", "bv12", "Tri Šešira", None, "sesira", "0.2 km", 0, ("14:00", "22:00"), "Konobar", 42, Industry::Hospitality, City::Beograd),
    row("b13", "bv13", "Manufaktura", None, "manufaktura", "0.4 km", 0, ("10:00", "18:00"), "Pomoćni radnik", 35, Industry::Hospitality, City::Beograd),
    row("b14", "bv14", "Ambar", None, "ambar", "0.9 km", 0, ("16:00", "00:00"), "Šanker", 45, Industry::Hospitality, City::Beograd),
    row("b15", "bv15", "Toro Latin GastroBar", None, "toro", "0.9 km", 0, ("18:00", "02:00"), "Konobar", 48, Industry::Hospitality, City::Beograd),
    row("bh1", "bhv1", "VMA", Some("Neurologija"), "vma", "2.5 km", 0, ("07:00", "15:00"), "Medicinska sestra", 50, Industry::Healthcare, City::Beograd),
    row("bh2", "bhv2", "KBC Bežanijska kosa", Some("Intezivna nega"), "kbc", "4.1 km", 1, ("19:00", "07:00"), "Medicinska sestra", 65, Industry::Healthcare, City::Beograd),
    row("bh3", "bhv3", "Klinički centar", Some("Hitna"), "kc", "1.5 km", 2, ("14:00", "22:00"), "Medicinska sestra", 55, Industry::Healthcare, City::Beograd),
    row("bh4", "bhv4", "GAK Narodni front", Some("Ginekologija"), "gak", "0.5 km", 0, ("07:00", "19:00"), "Babica", 60, Industry::Healthcare, City::Beograd),
    row("bh5", "bhv5", "Institut za majku i dete", Some("Pedijatrija"), "imd", "3.5 km", -1, ("08:00", "16:00"), "Medicinska sestra", 52, Industry::Healthcare, City::Beograd),
    row("n1", "nv1", "Project 72", None, "p72", "1.0 km", 0, ("12:00", "20:00"), "Konobar", 35, Industry::Hospitality, City::NoviSad),
    row("n2", "nv2", "Fish & Zelenish", None, "fish", "0.5 km", 0, ("11:00", "19:00"), "Kuvar", 55, Industry::Hospitality, City::NoviSad),
    row("n3", "nv3", "Petrus", None, "petrus", "0.2 km", 0, ("08:00", "16:00"), "Barista", 30, Industry::Hospitality, City::NoviSad),
    row("n4", "nv4", "Gondola", None, "gondola", "1.2 km", 0, ("14:00", "22:00"), "Konobar", 32, Industry::Hospitality, City::NoviSad),
    row("n5", "nv5", "Zak", None, "zak", "0.8 km", 0, ("17:00", "01:00"), "Šanker", 40, Industry::Hospitality, City::NoviSad),
    row("n6", "nv6", "Veliki", None, "veliki", "0.3 km", 0, ("10:00", "18:00"), "Konobar", 33, Industry::Hospitality, City::NoviSad),
    row("n7", "nv7", "Lazin Salaš", None, "lazin", "0.4 km", 0, ("12:00", "20:00"), "Konobar", 35, Industry::Hospitality, City::NoviSad),
    row("n8", "nv8", "Garden", None, "garden", "1.5 km", 0, ("09:00", "17:00"), "Barista", 30, Industry::Hospitality, City::NoviSad),
    row("n9", "nv9", "Piknik", None, "piknik", "3.0 km", 0, ("11:00", "19:00"), "Pomoćni radnik", 32, Industry::Hospitality, City::NoviSad),
    row("n10", "nv10", "Giardino", None, "giardino", "0.1 km", 0, ("20:00", "04:00"), "Šanker", 45, Industry::Hospitality, City::NoviSad),
    row("nh1", "nhv1", "Klinički centar Vojvodine", Some("Kardiologija"), "kcv", "2.0 km", 0, ("07:00", "15:00"), "Medicinska sestra", 55, Industry::Healthcare, City::NoviSad),
    row("nh2", "nhv2", "Institut za KVB Sremska Kamenica", Some("Hirurgija"), "sk", "5.0 km", 0, ("08:00", "20:00"), "Tehničar", 60, Industry::Healthcare, City::NoviSad),
    row("nh3", "nhv3", "Dom zdravlja Novi Sad", Some("Opšta praksa"), "dzns", "1.0 km", 0, ("07:00", "14:00"), "Medicinska sestra", 48, Industry::Healthcare, City::NoviSad),
    row("nh4", "nhv4", "Betanija", Some("Porođajno"), "betanija", "2.5 km", 0, ("19:00", "07:00"), "Babica", 65, Industry::Healthcare, City::NoviSad),
    row("k1", "kv1", "Mustang", None, "mustang", "1.5 km", 0, ("12:00", "20:00"), "Konobar", 30, Industry::Hospitality, City::Kragujevac),
    row("k2", "kv2", "Panorama", None, "panorama", "2.0 km", 0, ("14:00", "22:00"), "Šanker", 35, Industry::Hospitality, City::Kragujevac),
    row("k3", "kv3", "Dvorište", None, "dvoriste", "0.5 km", 0, ("09:00", "17:00"), "Barista", 28, Industry::Hospitality, City::Kragujevac),
    row("k4", "kv4", "Oranica", None, "oranica", "3.0 km", 0, ("11:00", "19:00"), "Kuvar", 50, Industry::Hospitality, City::Kragujevac),
    row("k5", "kv5", "Biblioteka kod Milutina", None, "biblioteka", "4.0 km", 0, ("13:00", "21:00"), "Konobar", 32, Industry::Hospitality, City::Kragujevac),
    row("k6", "kv6", "Peron", None, "peron", "0.2 km", 0, ("16:00", "00:00"), "Konobar", 30, Industry::Hospitality, City::Kragujevac),
    row("k7", "kv7", "Porta", None, "porta", "0.6 km", 0, ("10:00", "18:00"), "Barista", 28, Industry::Hospitality, City::Kragujevac),
    row("k8", "kv8", "Zeleni Zeleni", None, "zeleni", "1.0 km", 0, ("12:00", "20:00"), "Pomoćni radnik", 25, Industry::Hospitality, City::Kragujevac),
    row("k9", "kv9", "Mademoiselle", None, "mademoiselle", "0.4 km", 0, ("08:00", "16:00"), "Hostesa", 30, Industry::Hospitality, City::Kragujevac),
    row("k10", "kv10", "Taverna", None, "taverna", "0.8 km", 0, ("18:00", "02:00"), "Šanker", 38, Industry::Hospitality, City::Kragujevac),
    row("kh1", "khv1", "UKC Kragujevac", Some("Ortopedija"), "ukck", "1.5 km", 0, ("07:00", "15:00"), "Medicinska sestra", 50, Industry::Healthcare, City::Kragujevac),
    row("kh2", "khv2", "Dom zdravlja Kragujevac", Some("Pedijatrija"), "dzk", "0.8 km", 0, ("08:00", "16:00"), "Tehničar", 45, Industry::Healthcare, City::Kragujevac),
    row("kh3", "khv3", "Zavod za hitnu medicinsku pomoć KG", Some("Hitna"), "zhmp", "1.2 km", 0, ("19:00", "07:00"), "Medicinska sestra", 60, Industry::Healthcare, City::Kragujevac),
    row("kh4", "khv4", "Institut za javno zdravlje KG", Some("Laboratorija"), "ijz", "2.0 km", 0, ("07:30", "15:30"), "Laborant", 48, Industry::Healthcare, City::Kragujevac),];

/// Render a timestamp the way the web client produces them
/// (`YYYY-MM-DDTHH:MM:SS.sssZ`).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the demo shift set relative to `now`
pub fn demo_shifts(now: DateTime<Utc>) -> Vec<Shift> {
    DEMO_ROWS
        .iter()
        .map(|r| {
            Shift::open(
                r.id,
                ShiftDetails {
                    venue_id: Some(r.venue_id.to_string()),
                    venue_name: Some(r.venue_name.to_string()),
                    venue_avatar: Some(format!(
                        "https://picsum.photos/seed/{}/100/100",
                        r.avatar_seed
                    )),
                    distance: Some(r.distance.to_string()),
                    date: Some(iso_timestamp(now + Duration::days(r.day_offset))),
                    start_time: Some(r.hours.0.to_string()),
                    end_time: Some(r.hours.1.to_string()),
                    role: Some(r.role.to_string()),
                    department: r.department.map(str::to_string),
                    pay: Some(r.pay),
                    industry: Some(r.industry),
                    city: Some(r.city),
                },
            )
        })
        .collect()
}
