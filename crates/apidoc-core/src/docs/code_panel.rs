use serde::Serialize;

use crate::error::RenderError;
use crate::model::{ApiModel, ApiOperation, HttpMethod, OperationIds};
use crate::samples::{
    CodeSamples, LanguageTab, ResponseExample, SampleContext, SampleRenderer, language_tabs,
};

/// Request samples and example response shown beside one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodePanel {
    pub ids: OperationIds,
    pub method: HttpMethod,
    pub path: String,
    pub tabs: Vec<LanguageTab>,
    pub samples: CodeSamples,
    pub response: ResponseExample,
}

pub fn build_code_panel<R: SampleRenderer + ?Sized>(
    model: &ApiModel,
    op: &ApiOperation,
    renderer: &R,
) -> Result<CodePanel, RenderError> {
    let ctx = SampleContext::for_operation(model, op);
    Ok(CodePanel {
        ids: op.ids.clone(),
        method: op.method,
        path: op.path.clone(),
        tabs: language_tabs(),
        samples: renderer.render_samples(&ctx)?,
        response: renderer.render_response(&ctx)?,
    })
}
