use axum::Json;

use crate::render::{template_catalogue, TemplateInfo};

/// GET /api/templates
/// Template keys in catalogue order, for template pickers.
pub async fn list_templates_handler() -> Json<Vec<TemplateInfo>> {
    Json(template_catalogue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_all_templates_in_order() {
        let Json(templates) = list_templates_handler().await;
        assert_eq!(templates.len(), 60);
        assert_eq!(templates[0].name, "classic");
        let json = serde_json::to_value(&templates[0]).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "classic", "label": "Classic", "background": false }));
    }
}
