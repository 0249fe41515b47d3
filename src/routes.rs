use crate::{
    api::{draft, form, submit},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    // Everything is public; the form is an unauthenticated intake
    // surface, so the mutating routes are rate limited per peer IP.
    cfg.service(
        web::scope(&config.api_prefix)
            .service(web::resource("/form").route(web::get().to(form::get_form)))
            .service(
                web::resource("/draft")
                    .wrap(build_limiter(config.rate_draft_per_min))
                    .route(web::get().to(draft::get_draft))
                    .route(web::put().to(draft::save_draft)),
            )
            .service(
                web::resource("/submit")
                    .wrap(build_limiter(config.rate_submit_per_min))
                    .route(web::post().to(submit::submit)),
            ),
    );
}
