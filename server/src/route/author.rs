use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::CatalogService;
use application::transfer::AuthorDto;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{AuthorRequest, AuthorTransformer, PageRequest};
use crate::response::{AuthorPresenter, Created};

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors",
            get(
                |State(module): State<AppModule>, Query(req): Query<PageRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .try_intake(req)?
                        .handle(|(number, size)| async move {
                            CatalogService::<AuthorDto>::find_page(module.handler(), number, size)
                                .await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<AuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move {
                            CatalogService::<AuthorDto>::create(module.handler(), dto)
                                .await
                                .map(Created)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/authors/all",
            get(|State(module): State<AppModule>| async move {
                Controller::new(AuthorTransformer, AuthorPresenter)
                    .bypass(|| async move {
                        CatalogService::<AuthorDto>::find_all(module.handler()).await
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/authors/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .bypass(|| async move {
                            CatalogService::<AuthorDto>::find_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .head(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .bypass(|| async move {
                            CatalogService::<AuthorDto>::exists_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<AuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .try_intake((id, req))?
                        .handle(|(id, dto)| async move {
                            CatalogService::<AuthorDto>::update(module.handler(), id, dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .bypass(|| async move {
                            CatalogService::<AuthorDto>::delete_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
