//! Shared test fixtures

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use labsite_core::{Publication, PublicationKind};
use tempfile::TempDir;

pub fn publication(id: &str, title: &str, year: i32, kind: PublicationKind) -> Publication {
    Publication::new(
        id,
        title,
        vec!["Sarah Chen".to_string()],
        "Proceedings of Things",
        year,
        kind,
    )
}

/// The two-record list used by the query scenarios
pub fn scenario_publications() -> Vec<Publication> {
    vec![
        Publication::new(
            "pub-1",
            "Secure SCADA",
            vec!["Sarah Chen".to_string(), "Luis Garcia".to_string()],
            "ICS Security Conference",
            2023,
            PublicationKind::Conference,
        )
        .with_abstract("Physics-aware intrusion detection for industrial control.")
        .with_keywords(vec!["scada".to_string(), "ics".to_string()]),
        Publication::new(
            "pub-2",
            "IoT Trust Models",
            vec!["Grace Hopper".to_string()],
            "Journal of Trust",
            2021,
            PublicationKind::Journal,
        )
        .with_abstract("A survey of trust models for constrained devices.")
        .with_keywords(vec!["iot".to_string(), "trust".to_string()]),
    ]
}

/// A larger list with repeated years and titles
pub fn mixed_publications() -> Vec<Publication> {
    vec![
        publication("a", "Zero Trust Networks", 2022, PublicationKind::Journal),
        publication("b", "attestation at scale", 2021, PublicationKind::Conference),
        publication("c", "Édge Anomalies", 2022, PublicationKind::Workshop),
        publication("d", "Zero Trust Networks", 2020, PublicationKind::Preprint),
        publication("e", "Blockchain Provenance", 2022, PublicationKind::Conference),
        publication("f", "edge anomalies", 2021, PublicationKind::Journal),
        publication("g", "Attestation at Scale", 2023, PublicationKind::Journal),
    ]
}

pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(&path, contents).expect("write fixture file");
}

pub fn person_json(id: &str, name: &str, kind: &str) -> String {
    format!(
        r#"{{
  "id": "{id}",
  "name": "{name}",
  "role": "PhD Student",
  "email": "{id}@example.edu",
  "image": "/images/people/{id}.jpg",
  "research_interests": ["IoT security"],
  "type": "{kind}"
}}"#
    )
}

/// A content directory with lab info, two projects, three indexed people
/// (one without a profile), publications, and courses
pub fn content_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    write_file(
        root,
        "lab-info.json",
        r#"{
  "lead": {
    "name": "Dr. Jane Doe",
    "title": "Associate Professor",
    "department": "Computer Science",
    "university": "Example University",
    "email": "jdoe@example.edu",
    "bio": "Works on trustworthy IoT.",
    "image": "/images/lead.jpg",
    "credentials": "PhD"
  },
  "mission": "Trustworthy connected systems.",
  "focus_areas": ["IoT", "SCADA"],
  "university": {
    "name": "Example University",
    "department": "Computer Science",
    "address": {"street": "1 Campus Drive", "city": "Springfield", "state": "IL", "zip": "62701"}
  }
}"#,
    );

    write_file(
        root,
        "research-projects.json",
        r#"{
  "featuredProjects": [
    {
      "id": "scada-trust",
      "title": "Trustworthy SCADA",
      "description": "Physics-aware anomaly detection.",
      "status": "active",
      "image": "/images/scada.jpg",
      "funding": {"agency": "NSF", "amount": "$500,000", "duration": "2023-2026"},
      "team": ["iris", "luis"],
      "publications": 4,
      "type": "native"
    },
    {
      "id": "iot-provenance",
      "title": "IoT Provenance",
      "description": "Tamper-evident sensor data.",
      "status": "proposed",
      "image": "/images/prov.jpg",
      "team": ["iris", "ghost"],
      "type": "json"
    }
  ]
}"#,
    );

    write_file(
        root,
        "people-index.json",
        r#"{
  "people": [
    {"id": "iris", "type": "native"},
    {"id": "luis", "type": "json"},
    {"id": "missing", "type": "static"}
  ],
  "furryMembers": [
    {"id": "biscuit", "name": "Biscuit", "role": "Morale", "title": "Chief Morale Officer", "description": "Good dog.", "image": "/images/biscuit.jpg"}
  ]
}"#,
    );

    write_file(root, "profiles/iris.json", &person_json("iris", "Iris Park", "native"));
    write_file(root, "profiles/luis.json", &person_json("luis", "Luis Garcia", "json"));

    write_file(
        root,
        "publications.json",
        r#"{
  "recentPublications": [
    {
      "id": "p1", "title": "Secure SCADA", "authors": ["Iris Park"],
      "venue": "ICS Security", "year": 2023, "type": "conference",
      "abstract": "Intrusion detection.", "keywords": ["scada"], "citations": 12
    },
    {
      "id": "p2", "title": "", "authors": ["Nobody"],
      "venue": "Nowhere", "year": 2022, "type": "journal"
    },
    {
      "id": "p3", "title": "Bad Kind", "authors": ["A"],
      "venue": "V", "year": 2022, "type": "poster"
    },
    {
      "id": "p4", "title": "IoT Trust Models", "authors": ["Luis Garcia", "Iris Park"],
      "venue": "Journal of Trust", "year": 2021, "type": "journal", "doi": "10.1000/trust"
    },
    {
      "id": "p1", "title": "Duplicate", "authors": ["A"],
      "venue": "V", "year": 2020, "type": "preprint"
    }
  ]
}"#,
    );

    write_file(
        root,
        "courses.json",
        r#"{
  "courses": [
    {
      "id": "cs-501", "title": "IoT Security", "code": "CS 501",
      "institution": "Example University", "terms": ["Fall 2025"],
      "description": "Securing constrained devices.", "level": "Graduate",
      "credits": 3, "topics": ["firmware", "attestation"]
    }
  ]
}"#,
    );

    dir
}
