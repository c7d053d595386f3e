use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content version. Normally a string-to-string object, but any JSON shape
/// the server sends is carried through.
pub type Version = Value;

static EMPTY_VERSION: Version = Value::Null;

/// One volume record as returned by the server.
///
/// The typed fields are a lenient view of the record: a field that is
/// missing, `null` or of an unexpected type reads as absent. The record itself
/// is kept in `raw` and is what gets serialized back out, so JSON output
/// matches what was fetched. Which typed fields matter depends on `type`, see
/// [`Volume::kind`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Volume {
    pub id: String,
    pub worker_name: String,
    pub volume_type: String,
    pub container_handle: Option<String>,
    pub path: Option<String>,
    pub parent_handle: Option<String>,
    pub pipeline_name: Option<String>,
    pub job_name: Option<String>,
    pub step_name: Option<String>,
    pub resource_type: Option<VolumeResourceType>,
    pub base_resource_type: Option<BaseResourceType>,
    /// The record as received. `None` for volumes built in code.
    pub raw: Option<Map<String, Value>>,
}

/// The resource type a resource volume was fetched with. Either wraps a base
/// type directly or wraps another resource type at some version.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VolumeResourceType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<Box<VolumeResourceType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_resource_type: Option<BaseResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BaseResourceType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

/// Kind-specific view of a [`Volume`]. Only the fields that belong to the
/// kind are carried; empty strings stand in for absent ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeKind<'a> {
    Container {
        handle: &'a str,
        path: &'a str,
        parent: Option<&'a str>,
    },
    TaskCache {
        pipeline: &'a str,
        job: &'a str,
        step: &'a str,
    },
    Resource {
        resource_type: Option<&'a VolumeResourceType>,
    },
    ResourceType {
        base: Option<&'a BaseResourceType>,
    },
    Unknown,
}

/// Structural form of a [`VolumeResourceType`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DescriptorShape<'a> {
    Base(&'a BaseResourceType),
    Derived {
        inner: &'a VolumeResourceType,
        version: &'a Version,
    },
    Empty,
}

impl Volume {
    pub fn kind(&self) -> VolumeKind<'_> {
        match self.volume_type.as_str() {
            "container" => VolumeKind::Container {
                handle: text(&self.container_handle),
                path: text(&self.path),
                parent: self.parent_handle.as_deref().filter(|parent| !parent.is_empty()),
            },
            "task-cache" => VolumeKind::TaskCache {
                pipeline: text(&self.pipeline_name),
                job: text(&self.job_name),
                step: text(&self.step_name),
            },
            "resource" => VolumeKind::Resource {
                resource_type: self.resource_type.as_ref(),
            },
            "resource-type" => VolumeKind::ResourceType {
                base: self.base_resource_type.as_ref(),
            },
            _ => VolumeKind::Unknown,
        }
    }
}

impl From<Map<String, Value>> for Volume {
    fn from(raw: Map<String, Value>) -> Self {
        let string = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);

        let volume = Self {
            id: string("id").unwrap_or_default(),
            worker_name: string("worker_name").unwrap_or_default(),
            volume_type: string("type").unwrap_or_default(),
            container_handle: string("container_handle"),
            path: string("path"),
            parent_handle: string("parent_handle"),
            pipeline_name: string("pipeline_name"),
            job_name: string("job_name"),
            step_name: string("step_name"),
            resource_type: nested(&raw, "resource_type"),
            base_resource_type: nested(&raw, "base_resource_type"),
            raw: None,
        };

        Self { raw: Some(raw), ..volume }
    }
}

impl From<Volume> for Map<String, Value> {
    fn from(volume: Volume) -> Self {
        if let Some(raw) = volume.raw {
            return raw;
        }

        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(volume.id));
        map.insert("worker_name".to_string(), Value::String(volume.worker_name));
        map.insert("type".to_string(), Value::String(volume.volume_type));

        let strings = [
            ("container_handle", volume.container_handle),
            ("path", volume.path),
            ("parent_handle", volume.parent_handle),
            ("pipeline_name", volume.pipeline_name),
            ("job_name", volume.job_name),
            ("step_name", volume.step_name),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value));
            }
        }

        if let Some(Ok(value)) = volume.resource_type.map(serde_json::to_value) {
            map.insert("resource_type".to_string(), value);
        }
        if let Some(Ok(value)) = volume.base_resource_type.map(serde_json::to_value) {
            map.insert("base_resource_type".to_string(), value);
        }

        map
    }
}

impl VolumeResourceType {
    /// A base type wins over a nested one when a record carries both.
    pub fn shape(&self) -> DescriptorShape<'_> {
        if let Some(base) = &self.base_resource_type {
            return DescriptorShape::Base(base);
        }

        match &self.resource_type {
            Some(inner) => DescriptorShape::Derived {
                inner: inner.as_ref(),
                version: self.version(),
            },
            None => DescriptorShape::Empty,
        }
    }

    pub fn version(&self) -> &Version {
        self.version.as_ref().unwrap_or(&EMPTY_VERSION)
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

// A nested object that does not fit the expected shape reads as absent.
fn nested<T: DeserializeOwned>(raw: &Map<String, Value>, key: &str) -> Option<T> {
    raw.get(key)
        .filter(|value| !value.is_null())
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}
