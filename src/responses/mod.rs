pub mod short_link_redirect;
