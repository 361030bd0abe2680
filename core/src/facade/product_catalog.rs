//! Product catalog (inventory) methods.

remote_methods! {
    /// Catalog methods: price groups, warehouses, catalogs, categories,
    /// manufacturers, products. Obtained from `Baselinker::product_catalog`.
    pub struct ProductCatalog;

    /// Create a price group, or update it when `price_group_id` is set.
    fn add_inventory_price_group => "addInventoryPriceGroup"(price_group_id, name, description, currency);

    fn delete_inventory_price_group => "deleteInventoryPriceGroup"(price_group_id);

    fn get_inventory_price_groups => "getInventoryPriceGroups"();

    /// Create a warehouse, or update it when `warehouse_id` is set.
    fn add_inventory_warehouse => "addInventoryWarehouse"(warehouse_id, name, description, stock_edition);

    /// Remove a warehouse along with its stock.
    fn delete_inventory_warehouse => "deleteInventoryWarehouse"(warehouse_id);

    fn get_inventory_warehouses => "getInventoryWarehouses"();

    /// Create a catalog, or update it when `inventory_id` is set.
    fn add_inventory => "addInventory"(
        inventory_id, name, description, languages, default_language, price_groups,
        default_price_group, warehouses, default_warehouse, reservations
    );

    fn delete_inventory => "deleteInventory"(inventory_id);

    fn get_inventories => "getInventories"();

    /// Create a category, or update it when `category_id` is set.
    fn add_inventory_category => "addInventoryCategory"(inventory_id, category_id, name, parent_id);

    /// Remove a category. Its products move to the root category.
    fn delete_inventory_category => "deleteInventoryCategory"(category_id);

    fn get_inventory_categories => "getInventoryCategories"(inventory_id);

    fn add_inventory_manufacturer => "addInventoryManufacturer"(manufacturer_id, name);

    fn delete_inventory_manufacturer => "deleteInventoryManufacturer"(manufacturer_id);

    fn get_inventory_manufacturers => "getInventoryManufacturers"();

    fn get_inventory_extra_fields => "getInventoryExtraFields"();

    /// Integrations whose text fields can override catalog values.
    fn get_inventory_integrations => "getInventoryIntegrations"(inventory_id);

    /// Text field keys that can be overridden per integration.
    fn get_inventory_available_text_field_keys => "getInventoryAvailableTextFieldKeys"(inventory_id);

    /// Create a product, or update it when `product_id` is set.
    fn add_inventory_product => "addInventoryProduct"(
        inventory_id, product_id, parent_id, is_bundle, ean, sku, tax_rate, weight,
        height, width, length, star, manufacturer_id, category_id, prices, stock,
        locations, text_fields, images, links, bundle_products
    );

    fn delete_inventory_product => "deleteInventoryProduct"(product_id);

    fn get_inventory_products_data => "getInventoryProductsData"(inventory_id, products);

    /// Basic product data, filtered and paged.
    fn get_inventory_products_list => "getInventoryProductsList"(inventory_id;
        filter_id, filter_category_id, filter_ean, filter_sku, filter_name,
        filter_price_from, filter_price_to, filter_stock_from, page, filter_sort
    );

    fn get_inventory_products_stock => "getInventoryProductsStock"(inventory_id; page);

    /// Update stock of products and variants. At most 1000 products per call.
    fn update_inventory_products_stock => "updateInventoryProductsStock"(inventory_id, products);

    /// Gross prices per price group.
    fn get_inventory_products_prices => "getInventoryProductsPrices"(inventory_id; page);

    /// Update gross prices. At most 1000 products per call.
    fn update_inventory_products_prices => "updateInventoryProductsPrices"(inventory_id, products);

    /// Change events for a product and its variants.
    fn get_inventory_product_logs => "getInventoryProductLogs"(product_id;
        date_from, date_to, log_type, sort, page
    );
}
