/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Details of a user, visible to that user only
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Login name
    pub username: Option<String>,
    /// Numeric user id
    #[serde(rename = "userID")]
    pub user_id: Option<i64>,
    /// Country of residence
    pub country: Option<String>,
    /// Email address
    pub email_address: Option<String>,
}

/// Details of a user that may be shared with third parties
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoExternal {
    /// Numeric user id
    #[serde(rename = "userID")]
    pub user_id: Option<i64>,
    /// Country of residence
    pub country: Option<String>,
    /// Whether the user is subject to FIFO rules
    #[serde(rename = "FIFO")]
    pub fifo: Option<bool>,
}
