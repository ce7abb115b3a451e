//! Word lists backing the fake data providers

pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Ethan", "Fiona", "George", "Hannah", "Isaac", "Julia",
    "Kevin", "Laura", "Miguel", "Nora", "Oscar", "Priya", "Quentin", "Rosa", "Samuel", "Tara",
    "Umar", "Vera", "Walter", "Ximena", "Yusuf", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Carter", "Davis", "Evans", "Fischer", "Garcia", "Hughes", "Ito",
    "Johnson", "Kowalski", "Lopez", "Martin", "Nguyen", "O'Brien", "Patel", "Quinn", "Rossi",
    "Smith", "Thompson", "Underwood", "Valdez", "Wilson", "Young",
];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Toronto", "London", "Paris", "Berlin", "Madrid",
    "Lisbon", "Oslo", "Tokyo", "Seoul", "Sydney", "Auckland", "Cape Town", "Nairobi",
    "Buenos Aires", "Lima", "Mumbai", "Singapore",
];

pub const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Brazil", "Canada", "Chile", "Denmark", "Egypt", "France",
    "Germany", "India", "Italy", "Japan", "Kenya", "Mexico", "Netherlands", "Norway", "Peru",
    "Portugal", "South Korea", "Spain", "United Kingdom", "United States",
];

pub const STREETS: &[&str] = &[
    "Maple Street", "Oak Avenue", "Pine Road", "Cedar Lane", "Elm Drive", "Birch Way",
    "Willow Court", "Harbor Boulevard", "Mill Road", "Station Street",
];

pub const COMPANY_WORDS: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne", "Hooli", "Vandelay", "Soylent",
    "Cyberdyne", "Tyrell", "Massive", "Aperture", "Wonka",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Group", "and Sons", "PLC"];

pub const JOBS: &[&str] = &[
    "Accountant", "Architect", "Data Scientist", "Dentist", "Electrician", "Engineer",
    "Graphic Designer", "Journalist", "Librarian", "Mechanic", "Nurse", "Pharmacist",
    "Pilot", "Software Developer", "Teacher", "Translator", "Veterinarian",
];

pub const DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

pub const TLDS: &[&str] = &["com", "org", "net", "io"];

pub const WORDS: &[&str] = &[
    "amber", "beacon", "canyon", "delta", "ember", "falcon", "glacier", "harbor", "island",
    "jungle", "kernel", "lantern", "meadow", "nebula", "orbit", "prairie", "quartz", "river",
    "summit", "timber", "umbra", "valley", "willow", "zenith",
];
