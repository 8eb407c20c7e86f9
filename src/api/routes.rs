use axum::http::HeaderValue;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;
use crate::config::Config;

pub fn create_router(state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origin
        .split(',')
        .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let board_routes = Router::new()
        .route("/", get(handlers::board::get_board))
        .route("/selection", patch(handlers::board::set_all_selected))
        .route("/collapse", post(handlers::board::toggle_collapse_all))
        .route("/sort", put(handlers::board::set_sort));

    let column_routes = Router::new()
        .route("/", post(handlers::columns::create_column))
        .route("/{id}", patch(handlers::columns::rename_column))
        .route("/{id}/move", patch(handlers::columns::move_column))
        .route(
            "/{id}/selected",
            patch(handlers::columns::set_column_selected),
        )
        .route(
            "/{id}/collapse",
            post(handlers::columns::toggle_column_collapsed),
        );

    let card_routes = Router::new()
        .route(
            "/{id}",
            get(handlers::cards::get_card).delete(handlers::cards::delete_card),
        )
        .route("/{id}/duplicate", post(handlers::cards::duplicate_card))
        .route("/{id}/move", patch(handlers::cards::move_card))
        .route("/{id}/selected", patch(handlers::cards::set_card_selected))
        .route("/{id}/expand", post(handlers::cards::toggle_card_expanded));

    let drawer_routes = Router::new()
        .route("/", delete(handlers::cards::close_card))
        .route("/{id}", post(handlers::cards::open_card));

    let filter_routes = Router::new()
        .route("/tags", delete(handlers::filters::clear_tags))
        .route("/tags/{tag}", post(handlers::filters::toggle_tag));

    let drag_routes = Router::new()
        .route("/", delete(handlers::drag::end_drag))
        .route("/card", post(handlers::drag::begin_card_drag))
        .route("/column/{id}", post(handlers::drag::begin_column_drag))
        .route("/drop/{id}", post(handlers::drag::drop_on));

    let api_routes = Router::new()
        .nest("/board", board_routes)
        .nest("/columns", column_routes)
        .nest("/cards", card_routes)
        .nest("/drawer", drawer_routes)
        .nest("/filters", filter_routes)
        .nest("/drag", drag_routes)
        .route("/intents", post(handlers::board::post_intent))
        .route(
            "/search",
            put(handlers::filters::set_search_query)
                .post(handlers::filters::execute_search)
                .delete(handlers::filters::clear_search),
        )
        .route("/events", get(handlers::sse::sse_handler));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/health/live", get(handlers::liveness))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.frontend_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
