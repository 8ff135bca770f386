// Node description - the parameter table the host renders and the runner
// resolves against

use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    String,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParameterDefault {
    Text(&'static str),
    Number(i64),
}

impl ParameterDefault {
    pub fn to_value(self) -> Value {
        match self {
            ParameterDefault::Text(s) => json!(s),
            ParameterDefault::Number(n) => json!(n),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeOptions {
    /// Masked input
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub password: bool,
    /// Multi-line input height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

impl TypeOptions {
    pub fn is_empty(&self) -> bool {
        !self.password && self.rows.is_none()
    }
}

/// Declaration of one node parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDecl {
    pub display_name: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    pub default: ParameterDefault,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub description: &'static str,
    #[serde(skip_serializing_if = "TypeOptions::is_empty")]
    pub type_options: TypeOptions,
}

pub const PARAMETERS: &[ParameterDecl] = &[
    ParameterDecl {
        display_name: "Host 地址",
        name: "host",
        kind: ParameterKind::String,
        default: ParameterDefault::Text(""),
        required: true,
        placeholder: Some("例如: 127.0.0.1 或 aihost.example.com"),
        description: "数据湖服务的主机地址",
        type_options: TypeOptions { password: false, rows: None },
    },
    ParameterDecl {
        display_name: "端口号",
        name: "port",
        kind: ParameterKind::Number,
        default: ParameterDefault::Number(8080),
        required: true,
        placeholder: Some("例如: 8080"),
        description: "数据湖服务的端口号",
        type_options: TypeOptions { password: false, rows: None },
    },
    ParameterDecl {
        display_name: "用户名",
        name: "username",
        kind: ParameterKind::String,
        default: ParameterDefault::Text(""),
        required: false,
        placeholder: None,
        description: "用于连接服务的用户名",
        type_options: TypeOptions { password: false, rows: None },
    },
    ParameterDecl {
        display_name: "密码",
        name: "password",
        kind: ParameterKind::String,
        default: ParameterDefault::Text(""),
        required: false,
        placeholder: None,
        description: "用于连接服务的密码",
        type_options: TypeOptions { password: true, rows: None },
    },
    ParameterDecl {
        display_name: "系统提示词 (System Prompt)",
        name: "system_prompt",
        kind: ParameterKind::String,
        default: ParameterDefault::Text(""),
        required: false,
        placeholder: Some("例如: 你是一个数据分析助手..."),
        description: "定义AI模型的角色和行为的系统级指令",
        type_options: TypeOptions { password: false, rows: Some(4) },
    },
    ParameterDecl {
        display_name: "用户提示词 (User Prompt)",
        name: "user_prompt",
        kind: ParameterKind::String,
        default: ParameterDefault::Text(""),
        required: true,
        placeholder: Some("例如: 请帮我查询上个季度的销售额前十的产品..."),
        description: "用户输入的具体问题或指令",
        type_options: TypeOptions { password: false, rows: Some(6) },
    },
];

/// Look up a declaration by parameter name
pub fn parameter(name: &str) -> Option<&'static ParameterDecl> {
    PARAMETERS.iter().find(|p| p.name == name)
}

/// Static description of the connector node
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: &'static str,
    pub name: &'static str,
    pub group: Vec<&'static str>,
    pub version: u32,
    pub description: &'static str,
    pub inputs: Vec<&'static str>,
    pub outputs: Vec<&'static str>,
    pub usable_as_tool: bool,
    pub properties: &'static [ParameterDecl],
}

impl Default for NodeDescription {
    fn default() -> Self {
        Self {
            display_name: "数据湖仓连接器",
            name: "example",
            group: vec!["input"],
            version: 1,
            description: "连接数据湖仓并根据提示词获取信息",
            inputs: vec!["main"],
            outputs: vec!["main"],
            usable_as_tool: true,
            properties: PARAMETERS,
        }
    }
}
