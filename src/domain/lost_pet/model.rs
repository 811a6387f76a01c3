use mongodb::bson::Bson;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Deserializer, Serialize};

pub const CAT_LABEL: &str = "Gato";
pub const DOG_LABEL: &str = "Cachorro";

// Characters that would end or split a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'#').add(b'%').add(b'/').add(b'<')
    .add(b'>').add(b'?').add(b'`').add(b'{').add(b'}');

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A lost pet as stored in the `lostPets` collection.
///
/// Every field may be absent in the stored document, so everything is
/// optional and decoding never fails on a missing key.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LostPetRecord {
    #[serde(
        rename(serialize = "id", deserialize = "_id"),
        alias = "id",
        default,
        deserialize_with = "deserialize_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub offer_reward: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub last_seen_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    /// Exact, case-sensitive match on the stored label.
    pub fn from_label(label: &str) -> Option<Species> {
        match label {
            CAT_LABEL => Some(Species::Cat),
            DOG_LABEL => Some(Species::Dog),
            _ => None,
        }
    }
}

impl LostPetRecord {
    pub fn species_icon(&self) -> Option<Species> {
        self.species.as_deref().and_then(Species::from_label)
    }

    pub fn offers_reward(&self) -> bool {
        self.offer_reward == Some(true)
    }

    pub fn contact_name(&self) -> Option<&str> {
        self.contact.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn contact_phone(&self) -> Option<&str> {
        self.contact.as_ref().and_then(|c| c.phone.as_deref())
    }

    /// Route of the detail screen for this record, id percent-encoded.
    pub fn detail_path(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| format!("/lost-pets/{}", utf8_percent_encode(id, PATH_SEGMENT)))
    }
}

// `_id` is an ObjectId for documents created by the driver and a plain
// string for documents imported with their original identifiers.
fn deserialize_record_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Bson>::deserialize(deserializer)?;
    Ok(match value {
        Some(Bson::ObjectId(oid)) => Some(oid.to_hex()),
        Some(Bson::String(id)) => Some(id),
        Some(Bson::Int32(id)) => Some(id.to_string()),
        Some(Bson::Int64(id)) => Some(id.to_string()),
        _ => None,
    })
}
