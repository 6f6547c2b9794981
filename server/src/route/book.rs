use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::CatalogService;
use application::transfer::BookDto;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookRequest, BookTransformer, PageRequest};
use crate::response::{BookPresenter, Created};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>, Query(req): Query<PageRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|(number, size)| async move {
                            CatalogService::<BookDto>::find_page(module.handler(), number, size)
                                .await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<BookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move {
                            CatalogService::<BookDto>::create(module.handler(), dto)
                                .await
                                .map(Created)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/all",
            get(|State(module): State<AppModule>| async move {
                Controller::new(BookTransformer, BookPresenter)
                    .bypass(|| async move {
                        CatalogService::<BookDto>::find_all(module.handler()).await
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .bypass(|| async move {
                            CatalogService::<BookDto>::find_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .head(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .bypass(|| async move {
                            CatalogService::<BookDto>::exists_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<BookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake((id, req))?
                        .handle(|(id, dto)| async move {
                            CatalogService::<BookDto>::update(module.handler(), id, dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .bypass(|| async move {
                            CatalogService::<BookDto>::delete_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
