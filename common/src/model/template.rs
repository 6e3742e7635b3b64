use crate::model::slide::Slide;
use serde::{Deserialize, Serialize};

/// A pre-authored starter deck offered at presentation-creation time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slides: Vec<Slide>,
}
