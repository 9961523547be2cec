//! Sample records loaded into a freshly served process

use crate::store::StudentFields;

/// The two records a served process starts with when seeding is enabled
pub fn sample_students() -> Vec<StudentFields> {
    vec![
        StudentFields::required(
            "Aminata",
            "Diop",
            "1995-06-15",
            "123 Rue Principale",
            "Sénégalaise",
        )
        .with_email("aminata.diop@example.com")
        .with_phone("+221 12345678"),
        StudentFields::required(
            "Mamadou",
            "Sow",
            "1998-03-22",
            "456 Avenue des Fleurs",
            "Sénégalais",
        )
        .with_email("mamadou.sow@example.com")
        .with_phone("+221 87654321"),
    ]
}
