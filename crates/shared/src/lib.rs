use serde::{Deserialize, Serialize};

pub mod mesh;

pub use mesh::TriangleMesh;

/// Литералы тегов записей свойств (как в JSON-описании сцены и в record_id)
pub mod tags {
    pub const SOLID: &str = "SOLID";
    pub const DIRICHLET: &str = "DIRICHLET";
    pub const ROBIN_SOLID: &str = "ROBIN_SOLID";
    pub const ROBIN_FLUID: &str = "ROBIN_FLUID";
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_temperature() -> f64 {
    300.0
}

/// Тип объекта сцены. Экспортируются только меши.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectKind {
    Mesh,
    /// Любой другой тип (камера, свет, кривая...)
    #[default]
    #[serde(other)]
    Other,
}

/// Какие стороны треугольников принадлежат среде
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TriangleSides {
    Front,
    Back,
    #[default]
    Both,
}

impl TriangleSides {
    /// Символьное имя для дескриптора
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleSides::Front => "FRONT",
            TriangleSides::Back => "BACK",
            TriangleSides::Both => "BOTH",
        }
    }
}

/// Твёрдая среда (SOLID)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidPayload {
    #[serde(default = "default_one")]
    pub conductivity: f64,
    #[serde(default = "default_one")]
    pub rho: f64,
    #[serde(default = "default_one")]
    pub capacity: f64,
    #[serde(default = "default_one")]
    pub delta: f64,
    /// true = шаг delta вычисляется автоматически (AUTO)
    #[serde(default = "default_true")]
    pub delta_auto: bool,
    #[serde(default = "default_temperature")]
    pub initial_temp: f64,
    #[serde(default = "default_temperature")]
    pub imposed_temp: f64,
    /// true = навязанная температура неизвестна (UNKNOWN)
    #[serde(default = "default_true")]
    pub imposed_temp_unknown: bool,
    #[serde(default = "default_one")]
    pub volumic_power: f64,
    #[serde(default)]
    pub triangle_sides: TriangleSides,
}

impl Default for SolidPayload {
    fn default() -> Self {
        Self {
            conductivity: 1.0,
            rho: 1.0,
            capacity: 1.0,
            delta: 1.0,
            delta_auto: true,
            initial_temp: 300.0,
            imposed_temp: 300.0,
            imposed_temp_unknown: true,
            volumic_power: 1.0,
            triangle_sides: TriangleSides::Both,
        }
    }
}

/// Граничное условие Дирихле (фиксированная температура)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirichletPayload {
    #[serde(default = "default_temperature")]
    pub temp: f64,
}

impl Default for DirichletPayload {
    fn default() -> Self {
        Self { temp: 300.0 }
    }
}

/// Граничное условие Робена (конвекция + излучение).
/// Общая форма для ROBIN_SOLID и ROBIN_FLUID, отличается только ключевое слово.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobinPayload {
    #[serde(default = "default_temperature")]
    pub reference_temperature: f64,
    /// 0.0 - 1.0, но не проверяется
    #[serde(default = "default_one")]
    pub emissivity: f64,
    #[serde(default = "default_one")]
    pub specular_fraction: f64,
    /// Коэффициент конвективной теплоотдачи
    #[serde(default = "default_one")]
    pub hc: f64,
    #[serde(default = "default_temperature")]
    pub outside_temp: f64,
}

impl Default for RobinPayload {
    fn default() -> Self {
        Self {
            reference_temperature: 300.0,
            emissivity: 1.0,
            specular_fraction: 1.0,
            hc: 1.0,
            outside_temp: 300.0,
        }
    }
}

/// Запись свойства Stardis, прикреплённая к объекту.
///
/// В JSON это плоский объект с полем `"type"` и полями нагрузки:
/// `{"type": "DIRICHLET", "temp": 310.0}`. Нераспознанный тип не ломает
/// загрузку сцены, а сохраняется как `Unknown`: экспортёр его пропустит.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPropertyRecord", into = "RawPropertyRecord")]
pub enum PropertyRecord {
    Solid(SolidPayload),
    Dirichlet(DirichletPayload),
    RobinSolid(RobinPayload),
    RobinFluid(RobinPayload),
    Unknown { tag: String },
}

impl Default for PropertyRecord {
    fn default() -> Self {
        PropertyRecord::Solid(SolidPayload::default())
    }
}

impl PropertyRecord {
    /// Тег записи как он хранится в JSON
    pub fn tag(&self) -> &str {
        match self {
            PropertyRecord::Solid(_) => tags::SOLID,
            PropertyRecord::Dirichlet(_) => tags::DIRICHLET,
            PropertyRecord::RobinSolid(_) => tags::ROBIN_SOLID,
            PropertyRecord::RobinFluid(_) => tags::ROBIN_FLUID,
            PropertyRecord::Unknown { tag } => tag,
        }
    }
}

/// Проводное представление `PropertyRecord`: тег + произвольные поля
#[derive(Serialize, Deserialize)]
struct RawPropertyRecord {
    #[serde(rename = "type")]
    tag: String,
    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<RawPropertyRecord> for PropertyRecord {
    type Error = serde_json::Error;

    fn try_from(raw: RawPropertyRecord) -> Result<Self, Self::Error> {
        let payload = serde_json::Value::Object(raw.fields);
        Ok(match raw.tag.as_str() {
            tags::SOLID => PropertyRecord::Solid(serde_json::from_value(payload)?),
            tags::DIRICHLET => PropertyRecord::Dirichlet(serde_json::from_value(payload)?),
            tags::ROBIN_SOLID => PropertyRecord::RobinSolid(serde_json::from_value(payload)?),
            tags::ROBIN_FLUID => PropertyRecord::RobinFluid(serde_json::from_value(payload)?),
            _ => PropertyRecord::Unknown { tag: raw.tag },
        })
    }
}

impl From<PropertyRecord> for RawPropertyRecord {
    fn from(record: PropertyRecord) -> Self {
        let tag = record.tag().to_string();
        let fields = match &record {
            PropertyRecord::Solid(p) => payload_fields(p),
            PropertyRecord::Dirichlet(p) => payload_fields(p),
            PropertyRecord::RobinSolid(p) | PropertyRecord::RobinFluid(p) => payload_fields(p),
            PropertyRecord::Unknown { .. } => serde_json::Map::new(),
        };
        Self { tag, fields }
    }
}

/// Поля полезной нагрузки как JSON-объект.
///
/// Все payload-структуры состоят из чисел, bool и `TriangleSides`, поэтому
/// `to_value` всегда даёт `Value::Object`; пустая карта здесь недостижима.
fn payload_fields<T: Serialize>(payload: &T) -> serde_json::Map<String, serde_json::Value> {
    match serde_json::to_value(payload) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    }
}

/// Объект сцены (снимок, только для чтения во время экспорта)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Имя объекта, оно же имя mesh-файла
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Свойства Stardis, в порядке добавления
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
    /// Геометрия для экспорта в STL (может быть пустой)
    #[serde(default, skip_serializing_if = "TriangleMesh::is_empty")]
    pub mesh: TriangleMesh,
}

impl SceneObject {
    /// Создать меш-объект без свойств
    pub fn new_mesh(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            properties: Vec::new(),
            mesh: TriangleMesh::default(),
        }
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }

    /// Добавить запись свойства, вернуть её индекс
    pub fn add_property(&mut self, record: PropertyRecord) -> usize {
        self.properties.push(record);
        self.properties.len() - 1
    }

    /// Удалить запись по индексу (None, если индекс вне диапазона)
    pub fn remove_property(&mut self, index: usize) -> Option<PropertyRecord> {
        if index < self.properties.len() {
            Some(self.properties.remove(index))
        } else {
            None
        }
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// Настройки окружения сцены (излучение внешней среды)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEnvironment {
    #[serde(default)]
    pub use_env_radiation: bool,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_temperature")]
    pub reference_temperature: f64,
}

impl Default for SceneEnvironment {
    fn default() -> Self {
        Self {
            use_env_radiation: false,
            temperature: 300.0,
            reference_temperature: 300.0,
        }
    }
}

/// Сцена для экспорта в Stardis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StardisScene {
    #[serde(default)]
    pub environment: SceneEnvironment,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}
