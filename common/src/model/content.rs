use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One content record: a loosely typed tree of maps, lists, strings and numbers.
///
/// Records are rendered as they come from the JSON files; no schema is enforced
/// beyond "the collection is a JSON object".
pub type Record = Value;

/// All records of one content type, keyed by slug, in file order.
pub type Collection = Map<String, Value>;

/// The content collections the site reads from its data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// Service categories shown on `/services` and `/services/{category}`.
    Services,
    /// Individual service pages shown on `/service/{slug}`.
    ServiceDetails,
    Blogs,
    /// Not keyed by slug: holds the `team_members` and `company_values` lists.
    Leadership,
    CaseStudies,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::Services,
        CollectionKind::ServiceDetails,
        CollectionKind::Blogs,
        CollectionKind::Leadership,
        CollectionKind::CaseStudies,
    ];

    /// File name of the collection inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            CollectionKind::Services => "services.json",
            CollectionKind::ServiceDetails => "services_detail.json",
            CollectionKind::Blogs => "blogs.json",
            CollectionKind::Leadership => "leadership.json",
            CollectionKind::CaseStudies => "case_studies.json",
        }
    }

    /// Built-in mapping used when the collection file cannot be read.
    pub fn default_collection(self) -> Collection {
        let value = match self {
            CollectionKind::Services => json!({
                "business_process_management": {
                    "title": "Business Process Management (BPM)",
                    "services": [
                        "Title & Appraisal Services",
                        "Tax Services",
                        "Vendor Management",
                        "Document Indexing",
                        "Title Curative",
                        "Order Entry, QC, and Data Entry"
                    ]
                },
                "mortgage_real_estate": {
                    "title": "Mortgage & Real Estate Services",
                    "services": [
                        "Pre-processing, Processing & Underwriting",
                        "Title Search & Closing Support",
                        "Post-closing Audit",
                        "Property & Lien Search",
                        "Loan Boarding",
                        "Appraisal Review"
                    ]
                }
            }),
            CollectionKind::Leadership => json!({
                "team_members": [],
                "company_values": []
            }),
            CollectionKind::ServiceDetails | CollectionKind::Blogs | CollectionKind::CaseStudies => {
                json!({})
            }
        };

        match value {
            Value::Object(map) => map,
            _ => Collection::new(),
        }
    }
}
