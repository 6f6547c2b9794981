use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::CatalogService;
use application::transfer::PublisherDto;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{PublisherRequest, PublisherTransformer, PageRequest};
use crate::response::{PublisherPresenter, Created};

pub trait PublisherRouter {
    fn route_publisher(self) -> Self;
}

impl PublisherRouter for Router<AppModule> {
    fn route_publisher(self) -> Self {
        self.route(
            "/publishers",
            get(
                |State(module): State<AppModule>, Query(req): Query<PageRequest>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .try_intake(req)?
                        .handle(|(number, size)| async move {
                            let handler = module.handler();
                            CatalogService::<PublisherDto>::find_page(handler, number, size).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<PublisherRequest>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move {
                            CatalogService::<PublisherDto>::create(module.handler(), dto)
                                .await
                                .map(Created)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/publishers/all",
            get(|State(module): State<AppModule>| async move {
                Controller::new(PublisherTransformer, PublisherPresenter)
                    .bypass(|| async move {
                        CatalogService::<PublisherDto>::find_all(module.handler()).await
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/publishers/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .bypass(|| async move {
                            CatalogService::<PublisherDto>::find_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .head(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .bypass(|| async move {
                            CatalogService::<PublisherDto>::exists_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<PublisherRequest>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .try_intake((id, req))?
                        .handle(|(id, dto)| async move {
                            CatalogService::<PublisherDto>::update(module.handler(), id, dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .bypass(|| async move {
                            CatalogService::<PublisherDto>::delete_by_id(module.handler(), id).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
