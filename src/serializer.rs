//! Public projections. Each entity has one fixed field list; nothing else is ever serialized.

use crate::models::{CreatedRestaurantPizza, DbId, MenuItem, Pizza, Restaurant, RestaurantMenu};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantView {
    pub id: DbId,
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PizzaView {
    pub id: DbId,
    pub name: String,
    pub ingredients: String,
}

/// Join row with its pizza; `restaurant` is only filled in the create response.
///
/// `price` is a REAL column, so it is always written as a JSON float: a posted `5` reads back as `5.0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantPizzaView {
    pub id: DbId,
    pub price: f64,
    pub pizza_id: DbId,
    pub restaurant_id: DbId,
    pub pizza: PizzaView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantDetailView {
    #[serde(flatten)]
    pub restaurant: RestaurantView,
    pub restaurant_pizzas: Vec<RestaurantPizzaView>,
}

impl From<&Restaurant> for RestaurantView {
    fn from(r: &Restaurant) -> Self {
        RestaurantView {
            id: r.id,
            name: r.name.clone(),
            address: r.address.clone(),
        }
    }
}

impl From<&Pizza> for PizzaView {
    fn from(p: &Pizza) -> Self {
        PizzaView {
            id: p.id,
            name: p.name.clone(),
            ingredients: p.ingredients.clone(),
        }
    }
}

impl From<&MenuItem> for RestaurantPizzaView {
    fn from(item: &MenuItem) -> Self {
        let rp = &item.restaurant_pizza;
        RestaurantPizzaView {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: PizzaView::from(&item.pizza),
            restaurant: None,
        }
    }
}

impl From<&CreatedRestaurantPizza> for RestaurantPizzaView {
    fn from(created: &CreatedRestaurantPizza) -> Self {
        let rp = &created.restaurant_pizza;
        RestaurantPizzaView {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: PizzaView::from(&created.pizza),
            restaurant: Some(RestaurantView::from(&created.restaurant)),
        }
    }
}

impl From<&RestaurantMenu> for RestaurantDetailView {
    fn from(menu: &RestaurantMenu) -> Self {
        RestaurantDetailView {
            restaurant: RestaurantView::from(&menu.restaurant),
            restaurant_pizzas: menu.items.iter().map(RestaurantPizzaView::from).collect(),
        }
    }
}
