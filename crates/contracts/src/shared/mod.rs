pub mod trusted_html;
