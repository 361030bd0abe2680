//! External storages: shops and wholesalers connected to the account.

remote_methods! {
    /// External storage methods. Obtained from `Baselinker::external_storages`.
    pub struct ExternalStorages;

    /// Connected shops and wholesalers.
    fn get_external_storages_list => "getExternalStoragesList"();

    fn get_external_storage_categories => "getExternalStorageCategories"(storage_id);

    /// Detailed data for the given product ids.
    fn get_external_storage_products_data => "getExternalStorageProductsData"(storage_id, products);

    /// Basic product data, filtered and paged.
    fn get_external_storage_products_list => "getExternalStorageProductsList"(storage_id;
        filter_category_id, filter_sort, filter_id, filter_ean, filter_sku, filter_name,
        filter_price_from, filter_price_to, filter_quantity_from, filter_quantity_to,
        filter_available, page
    );

    fn get_external_storage_products_quantity => "getExternalStorageProductsQuantity"(storage_id, page);

    fn get_external_storage_products_prices => "getExternalStorageProductsPrices"(storage_id, page);

    /// Bulk stock update for products and variants.
    fn update_external_storage_products_quantity => "updateExternalStorageProductsQuantity"(storage_id, products);
}
