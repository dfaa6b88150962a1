use serde::{Serialize, Deserialize};

/// Stored owner record. `id` stays `None` until the repository assigns one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// Owner form as submitted by the client. Absent fields bind as empty strings
/// so that validation, not deserialization, reports them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerReceive {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSend {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Owner {
    pub fn new(owner_receive: OwnerReceive) -> Self {
        Owner {
            id: None,
            first_name: owner_receive.first_name,
            last_name: owner_receive.last_name,
            address: owner_receive.address,
            city: owner_receive.city,
            telephone: owner_receive.telephone,
        }
    }

    pub fn with_id(id: i64, owner_receive: OwnerReceive) -> Self {
        Owner {
            id: Some(id),
            ..Owner::new(owner_receive)
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn to_send(&self) -> OwnerSend {
        OwnerSend {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            telephone: self.telephone.clone(),
        }
    }
}

impl OwnerReceive {
    /// Echoes a submission back into a view, e.g. when it failed validation.
    pub fn to_send(&self, id: Option<i64>) -> OwnerSend {
        OwnerSend {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            telephone: self.telephone.clone(),
        }
    }
}
