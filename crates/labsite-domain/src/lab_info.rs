//! Lab-wide information (`lab-info.json`)

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabLead {
    pub name: String,
    pub title: String,
    pub department: String,
    pub university: String,
    pub email: String,
    pub bio: String,
    pub image: String,
    pub credentials: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerPosition {
    AboveTitle,
    BelowTitle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerHeight {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub enabled: bool,
    pub image: String,
    pub alt: String,
    pub show_on_mobile: bool,
    pub position: BannerPosition,
    pub height: BannerHeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    /// "City, ST 12345"
    pub fn locality_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub name: String,
    pub department: String,
    pub address: Address,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabInfo {
    pub lead: LabLead,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    pub mission: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    pub university: University,
}

impl LabInfo {
    /// Banner to show, if one is configured and enabled
    pub fn active_banner(&self) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.enabled)
    }
}
