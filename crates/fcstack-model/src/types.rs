//! Shared value types embedded in request payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Log Service destination for function logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    /// Log Service project.
    pub project: String,
    /// Logstore within the project.
    pub logstore: String,
}

/// VPC attachment for a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcConfig {
    /// VPC id.
    pub vpc_id: String,
    /// VSwitch ids inside the VPC.
    #[serde(rename = "vSwitchIds")]
    pub v_switch_ids: Vec<String>,
    /// Security group id.
    pub security_group_id: String,
}

/// A single NAS mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPoint {
    /// NAS server address, e.g. `xxx.nas.aliyuncs.com:/`.
    pub server_addr: String,
    /// Local mount directory inside the function instance.
    pub mount_dir: String,
}

/// NAS configuration for a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NasConfig {
    /// User id used to access NAS.
    pub user_id: i64,
    /// Group id used to access NAS.
    pub group_id: i64,
    /// Mount points.
    pub mount_points: Vec<MountPoint>,
}

/// Function code location: an OSS object or an inline zip archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    /// Bucket holding the code package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oss_bucket_name: Option<String>,
    /// Object key of the code package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oss_object_name: Option<String>,
    /// Base64-encoded zip archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_file: Option<String>,
}

impl Code {
    /// Code stored in an OSS object.
    #[must_use]
    pub fn from_oss(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            oss_bucket_name: Some(bucket.into()),
            oss_object_name: Some(object.into()),
            zip_file: None,
        }
    }

    /// Inline code from raw zip bytes; the archive is base64-encoded here.
    ///
    /// ```
    /// use fcstack_model::types::Code;
    ///
    /// let code = Code::from_zip(b"PK");
    /// assert_eq!(code.zip_file.as_deref(), Some("UEs="));
    /// ```
    #[must_use]
    pub fn from_zip(zip: impl AsRef<[u8]>) -> Self {
        Self {
            oss_bucket_name: None,
            oss_object_name: None,
            zip_file: Some(STANDARD.encode(zip)),
        }
    }
}

/// Target of an async invocation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Resource ARN, e.g. `acs:fc:{region}:{account}:services/{s}/functions/{f}`.
    pub destination: String,
}

/// Where async invocation outcomes are delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationConfig {
    /// Destination for successful invocations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Destination>,
    /// Destination for failed invocations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<Destination>,
}
