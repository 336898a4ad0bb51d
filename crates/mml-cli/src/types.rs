#[derive(Debug)]
pub struct DemoResult {
    pub steps: Vec<DemoStep>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct DemoStep {
    pub actor: &'static str,
    pub action: String,
    pub outcome: String,
    pub ok: bool,
}

impl DemoStep {
    pub fn passed(actor: &'static str, action: impl Into<String>, outcome: impl Into<String>) -> Self {
        Self {
            actor,
            action: action.into(),
            outcome: outcome.into(),
            ok: true,
        }
    }

    pub fn failed(actor: &'static str, action: impl Into<String>, outcome: impl Into<String>) -> Self {
        Self {
            actor,
            action: action.into(),
            outcome: outcome.into(),
            ok: false,
        }
    }
}
