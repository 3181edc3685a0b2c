//! 静态技术签名表
//! 声明式数据：每项为一个技术的名称、分类与各来源的匹配模式组
//! 表在进程启动时编译一次（见compiler模块），请求期间只读

use super::model::Signature;

/// 构建完整签名表
/// 同类技术相邻排列便于维护；输出顺序由检测器统一排序，与表序无关
pub fn signature_table() -> Vec<Signature> {
    vec![
        // ---------- CMS ----------
        Signature::new("WordPress", "CMS")
            .website("https://wordpress.org")
            .html(&[r"/wp-content/", r"/wp-includes/"])
            .script_src(&[r"/wp-(?:content|includes)/"])
            .stylesheet(&[r"/wp-content/"])
            .generator(&[r"(?i)wordpress"]),
        Signature::new("Drupal", "CMS")
            .website("https://www.drupal.org")
            .html(&[r"/sites/default/files/"])
            .header("x-drupal-cache", None)
            .header("x-generator", Some(r"(?i)drupal"))
            .generator(&[r"(?i)drupal"]),
        Signature::new("Joomla", "CMS")
            .website("https://www.joomla.org")
            .html(&[r"/media/jui/", r"(?i)com_content"])
            .generator(&[r"(?i)joomla"]),
        Signature::new("Wix", "CMS")
            .website("https://www.wix.com")
            .html(&[r"(?i)static\.wixstatic\.com"])
            .header("x-wix-request-id", None)
            .generator(&[r"(?i)wix\.com"]),
        Signature::new("Squarespace", "CMS")
            .website("https://www.squarespace.com")
            .html(&[r"(?i)static1\.squarespace\.com"])
            .generator(&[r"(?i)squarespace"]),
        Signature::new("Webflow", "CMS")
            .website("https://webflow.com")
            .html(&[r"(?i)data-wf-site"])
            .script_src(&[r"(?i)assets\.website-files\.com"])
            .generator(&[r"(?i)webflow"]),

        // ---------- 电商平台 ----------
        Signature::new("Shopify", "E-commerce")
            .website("https://www.shopify.com")
            .html(&[r"(?i)Shopify\.theme", r"cdn\.shopify\.com"])
            .script_src(&[r"cdn\.shopify\.com"])
            .header("x-shopify-stage", None)
            .header("x-shopid", None),
        Signature::new("WooCommerce", "E-commerce")
            .website("https://woocommerce.com")
            .html(&[r"(?i)woocommerce", r"wc-ajax"])
            .script_src(&[r"/wp-content/plugins/woocommerce/"])
            .stylesheet(&[r"(?i)woocommerce"])
            .generator(&[r"(?i)woocommerce"]),
        Signature::new("Magento", "E-commerce")
            .website("https://business.adobe.com/products/magento/magento-commerce.html")
            .html(&[r"(?i)Mage\.Cookies", r"/static/version\d+/"])
            .script_src(&[r"(?i)/mage/", r"(?i)requirejs/mage"])
            .header("x-magento-cache-debug", None),
        Signature::new("PrestaShop", "E-commerce")
            .website("https://www.prestashop.com")
            .html(&[r"(?i)prestashop", r"/modules/ps_"])
            .generator(&[r"(?i)prestashop"]),
        Signature::new("Tiendanube", "E-commerce")
            .website("https://www.tiendanube.com")
            .html(&[r"(?i)tiendanube", r"(?i)nuvemshop"])
            .script_src(&[r"(?i)(?:cdn|static)\.tiendanube\.com"]),
        Signature::new("VTEX", "E-commerce")
            .website("https://vtex.com")
            .html(&[r"(?i)vteximg\.com\.br", r"(?i)vtexassets\.com"])
            .script_src(&[r"(?i)vtex"])
            .header("x-vtex-router-backend", None),

        // ---------- 前端框架 ----------
        Signature::new("Next.js", "Framework")
            .website("https://nextjs.org")
            .html(&[r"__NEXT_DATA__"])
            .script_src(&[r"/_next/static/"])
            .header("x-powered-by", Some(r"(?i)next\.js")),
        Signature::new("Nuxt", "Framework")
            .website("https://nuxt.com")
            .html(&[r"__NUXT__"])
            .script_src(&[r"/_nuxt/"]),
        Signature::new("React", "JavaScript library")
            .website("https://react.dev")
            .html(&[r"data-reactroot"])
            .script_src(&[r"react(?:\.production)?(?:\.min)?\.js"]),
        Signature::new("Vue.js", "JavaScript library")
            .website("https://vuejs.org")
            .html(&[r"data-v-app"])
            .script_src(&[r"vue(?:\.global)?(?:\.prod)?(?:\.min)?\.js"]),
        Signature::new("Angular", "Framework")
            .website("https://angular.dev")
            .html(&[r"ng-version"]),
        Signature::new("jQuery", "JavaScript library")
            .website("https://jquery.com")
            .script_src(&[r"jquery(?:-[\d.]+)?(?:\.slim)?(?:\.min)?\.js"]),
        Signature::new("Bootstrap", "UI framework")
            .website("https://getbootstrap.com")
            .script_src(&[r"bootstrap(?:\.bundle)?(?:\.min)?\.js"])
            .stylesheet(&[r"bootstrap(?:\.min)?\.css"]),
        Signature::new("Tailwind CSS", "UI framework")
            .website("https://tailwindcss.com")
            .stylesheet(&[r"(?i)tailwind"])
            .script_src(&[r"cdn\.tailwindcss\.com"]),
        Signature::new("Font Awesome", "Font script")
            .website("https://fontawesome.com")
            .stylesheet(&[r"(?i)font-?awesome"])
            .script_src(&[r"kit\.fontawesome\.com"]),
        Signature::new("Google Fonts", "Font script")
            .website("https://fonts.google.com")
            .stylesheet(&[r"fonts\.googleapis\.com"]),

        // ---------- 统计与营销 ----------
        Signature::new("Google Analytics", "Analytics")
            .website("https://marketingplatform.google.com/about/analytics/")
            .html(&[r"(?i)GoogleAnalyticsObject|gtag\("])
            .script_src(&[r"google-analytics\.com/analytics\.js", r"googletagmanager\.com/gtag/js"]),
        Signature::new("Google Tag Manager", "Tag manager")
            .website("https://tagmanager.google.com")
            .html(&[r"GTM-[A-Z0-9]+"])
            .script_src(&[r"googletagmanager\.com/gtm\.js"]),
        Signature::new("Meta Pixel", "Analytics")
            .website("https://www.facebook.com/business/tools/meta-pixel")
            .html(&[r"(?i)fbq\(\s*['\x22]init"])
            .script_src(&[r"connect\.facebook\.net/.*/fbevents\.js"]),
        Signature::new("Hotjar", "Analytics")
            .website("https://www.hotjar.com")
            .html(&[r"(?i)hotjar"])
            .script_src(&[r"static\.hotjar\.com"]),
        Signature::new("Mercado Pago", "Payment processor")
            .website("https://www.mercadopago.com")
            .html(&[r"(?i)mercadopago"])
            .script_src(&[r"(?i)sdk\.mercadopago\.com"]),

        // ---------- 服务器与CDN ----------
        Signature::new("Cloudflare", "CDN")
            .website("https://www.cloudflare.com")
            .header("cf-ray", None)
            .header("server", Some(r"(?i)cloudflare")),
        Signature::new("Nginx", "Web server")
            .website("https://nginx.org")
            .header("server", Some(r"(?i)nginx")),
        Signature::new("Apache", "Web server")
            .website("https://httpd.apache.org")
            .header("server", Some(r"(?i)apache")),
        Signature::new("LiteSpeed", "Web server")
            .website("https://www.litespeedtech.com")
            .header("server", Some(r"(?i)litespeed")),
        Signature::new("Vercel", "Hosting")
            .website("https://vercel.com")
            .header("x-vercel-id", None)
            .header("server", Some(r"(?i)vercel")),
        Signature::new("Netlify", "Hosting")
            .website("https://www.netlify.com")
            .header("x-nf-request-id", None)
            .header("server", Some(r"(?i)netlify")),
        Signature::new("PHP", "Programming language")
            .website("https://www.php.net")
            .header("x-powered-by", Some(r"(?i)php")),
    ]
}
