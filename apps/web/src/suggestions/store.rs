//! Static reference data offered as autocomplete candidates.

use crate::models::suggestion::{JobSuggestion, LocationSuggestion};

pub const JOB_SUGGESTIONS: &[JobSuggestion] = &[
    JobSuggestion::new("Software Engineer"),
    JobSuggestion::new("Data Scientist"),
    JobSuggestion::new("Product Manager"),
    JobSuggestion::new("DevOps Engineer"),
    JobSuggestion::new("UI/UX Designer"),
    JobSuggestion::new("Frontend Developer"),
    JobSuggestion::new("Backend Developer"),
    JobSuggestion::new("Full Stack Developer"),
    JobSuggestion::new("Machine Learning Engineer"),
    JobSuggestion::new("Cloud Architect"),
];

pub const LOCATION_SUGGESTIONS: &[LocationSuggestion] = &[
    LocationSuggestion::city("Bangalore", "Karnataka"),
    LocationSuggestion::city("Mumbai", "Maharashtra"),
    LocationSuggestion::city("Delhi", "Delhi"),
    LocationSuggestion::city("Hyderabad", "Telangana"),
    LocationSuggestion::city("Pune", "Maharashtra"),
    LocationSuggestion::city("Chennai", "Tamil Nadu"),
    LocationSuggestion::city("Gurgaon", "Haryana"),
    LocationSuggestion::work_mode("Remote"),
    LocationSuggestion::work_mode("Hybrid"),
    LocationSuggestion::state("Karnataka"),
    LocationSuggestion::state("Maharashtra"),
    LocationSuggestion::state("Telangana"),
    LocationSuggestion::state("Tamil Nadu"),
];
