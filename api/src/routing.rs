use crate::controllers::*;
use actix_web::web;

pub fn routes(app: &mut web::ServiceConfig) {
    app.service(web::resource("/status").route(web::get().to(status::check)))
        .service(web::resource("/events/{id}/guest_list").route(web::get().to(events::guest_list)))
        .service(web::resource("/events/{id}/tickets").route(web::post().to(tickets::create)))
        .service(web::resource("/events/{id}").route(web::get().to(events::show)))
        .service(web::resource("/events").route(web::post().to(events::create)))
        .service(web::resource("/tickets/{id}/code").route(web::get().to(tickets::show_code)))
        .service(web::resource("/tickets/{id}/check_in").route(web::post().to(tickets::check_in)))
        .service(web::resource("/tickets/{id}").route(web::get().to(tickets::show)))
        .service(web::resource("/verify").route(web::get().to(verifications::show)));
}
