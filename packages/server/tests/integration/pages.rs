use crate::common::{TestApp, routes};

mod listing_page {
    use super::*;

    #[tokio::test]
    async fn index_renders_every_cupcake() {
        let app = TestApp::spawn().await;
        let id = app.create_cupcake("Chocolate Mint", "Small", 4.0).await;
        app.create_cupcake("Vanilla", "Large", 5.0).await;

        let res = app.get(routes::INDEX).await;

        assert_eq!(res.status, 200);
        assert!(res.content_type.starts_with("text/html"));
        assert!(res.text.contains("Chocolate Mint"));
        assert!(res.text.contains("Vanilla"));
        assert!(res.text.contains(&format!("/edit-cupcake/{id}")));
        assert!(res.text.contains(routes::CLIENT_SCRIPT));
    }

    #[tokio::test]
    async fn index_renders_with_no_cupcakes() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::INDEX).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("No cupcakes yet."));
    }

    #[tokio::test]
    async fn user_text_is_escaped() {
        let app = TestApp::spawn().await;
        app.create_cupcake("<script>x</script>", "Small", 1.0).await;

        let res = app.get(routes::INDEX).await;

        assert_eq!(res.status, 200);
        assert!(!res.text.contains("<script>x</script>"));
        assert!(res.text.contains("&lt;script&gt;x"));
    }
}

mod edit_page {
    use super::*;

    #[tokio::test]
    async fn edit_page_is_prefilled_with_the_cupcake() {
        let app = TestApp::spawn().await;
        let id = app.create_cupcake("Lemon", "Large", 3.5).await;

        let res = app.get(&routes::edit_page(id)).await;

        assert_eq!(res.status, 200);
        assert!(res.content_type.starts_with("text/html"));
        assert!(res.text.contains(&format!(r#"id="cupcake-id" value="{id}""#)));
        assert!(res.text.contains(r#"value="Lemon""#));
        assert!(res.text.contains(r#"value="3.5""#));
    }

    #[tokio::test]
    async fn edit_page_for_unknown_id_is_an_html_404() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::edit_page(9999)).await;

        assert_eq!(res.status, 404);
        assert!(res.content_type.starts_with("text/html"));
        assert!(res.text.contains("Cupcake 9999 not found"));
    }
}

mod client_script {
    use super::*;

    #[tokio::test]
    async fn script_is_served_as_javascript() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::CLIENT_SCRIPT).await;

        assert_eq!(res.status, 200);
        assert!(res.content_type.starts_with("application/javascript"));
        assert!(res.text.contains("/api/cupcakes"));
    }

    #[tokio::test]
    async fn script_renders_an_empty_state_for_empty_results() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::CLIENT_SCRIPT).await;

        assert!(res.text.contains("cupcakes.length === 0"));
        assert!(res.text.contains("No matching cupcakes."));
    }
}
