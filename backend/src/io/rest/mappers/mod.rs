pub mod member_mapper;
